//! Toggle descriptors attached to capability declarations.

use crate::error::DescriptorError;
use crate::ident::Ident;
use crate::options::OptionMap;

/// The declaration-surface description of how a capability splits.
///
/// Carried in a declaration's options under
/// [`TOGGLE_KEY`](crate::TOGGLE_KEY). All three parts stay optional until
/// [`into_spec`](ToggleDescriptor::into_spec) validates them; a descriptor
/// missing its feature name or either option set is malformed. An *empty*
/// option set is fine: pass `OptionMap::new()`.
///
/// # Example
///
/// ```rust,ignore
/// let descriptor = ToggleDescriptor::for_feature(Ident::new("new_ranking")?)
///     .with_on(options! { "scope" => "ranked" })
///     .with_off(OptionMap::new());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleDescriptor {
    feature: Option<Ident>,
    on: Option<OptionMap>,
    off: Option<OptionMap>,
}

impl ToggleDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a descriptor controlled by `feature`.
    pub fn for_feature(feature: Ident) -> Self {
        Self {
            feature: Some(feature),
            on: None,
            off: None,
        }
    }

    /// Set the options merged into the active (`_with_`) variant.
    pub fn with_on(mut self, on: OptionMap) -> Self {
        self.on = Some(on);
        self
    }

    /// Set the options merged into the inactive (`_without_`) variant.
    pub fn with_off(mut self, off: OptionMap) -> Self {
        self.off = Some(off);
        self
    }

    /// Validate into a [`ToggleSpec`].
    pub fn into_spec(self) -> Result<ToggleSpec, DescriptorError> {
        let feature = self.feature.ok_or(DescriptorError::MissingFeature)?;
        let on = self.on.ok_or(DescriptorError::MissingOn)?;
        let off = self.off.ok_or(DescriptorError::MissingOff)?;
        Ok(ToggleSpec { feature, on, off })
    }
}

/// A validated toggle descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSpec {
    /// The feature toggle controlling variant selection.
    pub feature: Ident,
    /// Options merged into the active (`_with_`) variant.
    pub on: OptionMap,
    /// Options merged into the inactive (`_without_`) variant.
    pub off: OptionMap,
}
