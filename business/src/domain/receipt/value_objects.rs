/// Source encodings the normalizer decodes directly, without sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageMediaType {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageMediaType {
    pub const ALL: [ImageMediaType; 4] = [
        ImageMediaType::Png,
        ImageMediaType::Jpeg,
        ImageMediaType::Gif,
        ImageMediaType::Webp,
    ];

    pub fn mime(&self) -> &'static str {
        match self {
            ImageMediaType::Png => "image/png",
            ImageMediaType::Jpeg => "image/jpeg",
            ImageMediaType::Gif => "image/gif",
            ImageMediaType::Webp => "image/webp",
        }
    }
}

impl std::fmt::Display for ImageMediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mime())
    }
}

impl std::str::FromStr for ImageMediaType {
    type Err = String;

    /// Parses a declared MIME type, ignoring case and parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = s.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "image/png" => Ok(ImageMediaType::Png),
            "image/jpeg" => Ok(ImageMediaType::Jpeg),
            "image/gif" => Ok(ImageMediaType::Gif),
            "image/webp" => Ok(ImageMediaType::Webp),
            _ => Err(format!("Invalid image media type: {}", s)),
        }
    }
}

/// Whether decoded model output is checked against the line-item shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemValidation {
    #[default]
    PassThrough,
    Strict,
}

impl std::fmt::Display for ItemValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemValidation::PassThrough => write!(f, "pass_through"),
            ItemValidation::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for ItemValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass_through" => Ok(ItemValidation::PassThrough),
            "strict" => Ok(ItemValidation::Strict),
            _ => Err(format!("Invalid item validation mode: {}", s)),
        }
    }
}
