//! Model name — the closed set of network architectures the API knows about.

use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Human-readable list of accepted values, used in error messages.
const EXPECTED: &str = "'alexnet', 'resnet' or 'lenet'";

/// A known neural network architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Alexnet, Self::Resnet, Self::Lenet];

    /// Wire representation of the variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alexnet => "alexnet",
            Self::Resnet => "resnet",
            Self::Lenet => "lenet",
        }
    }

    /// Tagline returned alongside the model name.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Alexnet => "Deep Learning FTW!",
            Self::Lenet => "LeCNN all the images",
            Self::Resnet => "Have some residuals",
        }
    }
}

impl FromStr for ModelName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or(ValidationError::Enum { expected: EXPECTED })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_known_variant() {
        for model in ModelName::ALL {
            assert_eq!(model.as_str().parse::<ModelName>().unwrap(), model);
        }
    }

    #[test]
    fn should_reject_unknown_value() {
        let err = "vgg".parse::<ModelName>().unwrap_err();
        assert_eq!(err.kind(), "enum");
        assert_eq!(
            err.to_string(),
            "Input should be 'alexnet', 'resnet' or 'lenet'"
        );
    }

    #[test]
    fn should_be_case_sensitive() {
        assert!("AlexNet".parse::<ModelName>().is_err());
    }

    #[test]
    fn should_map_each_variant_to_its_message() {
        assert_eq!(ModelName::Alexnet.message(), "Deep Learning FTW!");
        assert_eq!(ModelName::Lenet.message(), "LeCNN all the images");
        assert_eq!(ModelName::Resnet.message(), "Have some residuals");
    }

    #[test]
    fn should_serialize_as_lowercase_string() {
        let json = serde_json::to_string(&ModelName::Resnet).unwrap();
        assert_eq!(json, "\"resnet\"");
    }
}
