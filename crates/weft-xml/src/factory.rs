//! Document factories
//!
//! A factory is configured through [`Feature`] switches and then asked for
//! an empty document. Defaults mirror a stock XML document builder:
//! namespace processing off, external resources allowed.

use std::fmt;

use crate::{XmlDocument, XmlTreeSink};

/// Configurable factory switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    NamespaceAware,
    DisallowDoctypeDecl,
    ExternalGeneralEntities,
    ExternalParameterEntities,
    LoadExternalDtd,
    XIncludeAware,
    ExpandEntityReferences,
}

impl Feature {
    /// Short switch name, used in logs and error messages
    pub fn name(self) -> &'static str {
        match self {
            Feature::NamespaceAware => "namespaces",
            Feature::DisallowDoctypeDecl => "disallow-doctype-decl",
            Feature::ExternalGeneralEntities => "external-general-entities",
            Feature::ExternalParameterEntities => "external-parameter-entities",
            Feature::LoadExternalDtd => "load-external-dtd",
            Feature::XIncludeAware => "xinclude",
            Feature::ExpandEntityReferences => "expand-entity-references",
        }
    }

    /// Well-known feature URI
    ///
    /// `ExpandEntityReferences` has no URI of its own. It maps to
    /// `create-entity-ref-nodes`, which has the opposite polarity: expanding
    /// entity references means that URI is set to false.
    pub fn uri(self) -> &'static str {
        match self {
            Feature::NamespaceAware => "http://xml.org/sax/features/namespaces",
            Feature::DisallowDoctypeDecl => "http://apache.org/xml/features/disallow-doctype-decl",
            Feature::ExternalGeneralEntities => {
                "http://xml.org/sax/features/external-general-entities"
            }
            Feature::ExternalParameterEntities => {
                "http://xml.org/sax/features/external-parameter-entities"
            }
            Feature::LoadExternalDtd => {
                "http://apache.org/xml/features/nonvalidating/load-external-dtd"
            }
            Feature::XIncludeAware => "http://apache.org/xml/features/xinclude",
            Feature::ExpandEntityReferences => {
                "http://apache.org/xml/features/dom/create-entity-ref-nodes"
            }
        }
    }

    /// Value of [`Feature::uri`] that corresponds to `enabled`
    pub fn uri_value(self, enabled: bool) -> bool {
        match self {
            Feature::ExpandEntityReferences => !enabled,
            _ => enabled,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Factory configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
    #[error("feature not recognized: {0}")]
    UnsupportedFeature(Feature),

    #[error("feature {feature} cannot be set to {enabled}")]
    Rejected { feature: Feature, enabled: bool },

    #[error("cannot create a document while {feature} is {enabled}")]
    Misconfigured { feature: Feature, enabled: bool },
}

/// Produces empty destination documents
pub trait DocumentFactory {
    type Document: XmlTreeSink;

    /// Change one switch
    fn set_feature(&mut self, feature: Feature, enabled: bool) -> Result<(), FactoryError>;

    /// Create an empty document with the current configuration
    fn new_document(&self) -> Result<Self::Document, FactoryError>;
}

/// Factory switch values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryFeatures {
    pub namespace_aware: bool,
    pub disallow_doctype_decl: bool,
    pub external_general_entities: bool,
    pub external_parameter_entities: bool,
    pub load_external_dtd: bool,
    pub xinclude_aware: bool,
    pub expand_entity_references: bool,
}

impl Default for FactoryFeatures {
    fn default() -> Self {
        Self {
            namespace_aware: false,
            disallow_doctype_decl: false,
            external_general_entities: true,
            external_parameter_entities: true,
            load_external_dtd: true,
            xinclude_aware: false,
            expand_entity_references: true,
        }
    }
}

impl FactoryFeatures {
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::NamespaceAware => self.namespace_aware,
            Feature::DisallowDoctypeDecl => self.disallow_doctype_decl,
            Feature::ExternalGeneralEntities => self.external_general_entities,
            Feature::ExternalParameterEntities => self.external_parameter_entities,
            Feature::LoadExternalDtd => self.load_external_dtd,
            Feature::XIncludeAware => self.xinclude_aware,
            Feature::ExpandEntityReferences => self.expand_entity_references,
        }
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        let slot = match feature {
            Feature::NamespaceAware => &mut self.namespace_aware,
            Feature::DisallowDoctypeDecl => &mut self.disallow_doctype_decl,
            Feature::ExternalGeneralEntities => &mut self.external_general_entities,
            Feature::ExternalParameterEntities => &mut self.external_parameter_entities,
            Feature::LoadExternalDtd => &mut self.load_external_dtd,
            Feature::XIncludeAware => &mut self.xinclude_aware,
            Feature::ExpandEntityReferences => &mut self.expand_entity_references,
        };
        *slot = enabled;
    }
}

/// Factory for [`XmlDocument`]
///
/// The arena document has no entity resolver and no namespace-unaware mode,
/// so turning namespace processing off is rejected outright, and documents
/// are only handed out once namespace processing is on and every
/// external-loading switch is off.
#[derive(Debug, Clone, Default)]
pub struct XmlDocumentFactory {
    features: FactoryFeatures,
}

impl XmlDocumentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory starting from explicit switch values
    pub fn with_features(features: FactoryFeatures) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &FactoryFeatures {
        &self.features
    }
}

impl DocumentFactory for XmlDocumentFactory {
    type Document = XmlDocument;

    fn set_feature(&mut self, feature: Feature, enabled: bool) -> Result<(), FactoryError> {
        if feature == Feature::NamespaceAware && !enabled {
            return Err(FactoryError::Rejected { feature, enabled });
        }
        self.features.set(feature, enabled);
        Ok(())
    }

    fn new_document(&self) -> Result<XmlDocument, FactoryError> {
        const REQUIRED: [(Feature, bool); 6] = [
            (Feature::NamespaceAware, true),
            (Feature::ExternalGeneralEntities, false),
            (Feature::ExternalParameterEntities, false),
            (Feature::LoadExternalDtd, false),
            (Feature::XIncludeAware, false),
            (Feature::ExpandEntityReferences, false),
        ];
        for (feature, required) in REQUIRED {
            let enabled = self.features.get(feature);
            if enabled != required {
                return Err(FactoryError::Misconfigured { feature, enabled });
            }
        }
        Ok(XmlDocument::new())
    }
}
