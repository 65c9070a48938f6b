//! Fixed allow-lists for every synthesis choice.
//!
//! Each list is a closed enum. Parsing goes through `FromStr`, which is an
//! exact, case-sensitive match and reports the offending value together with
//! the full set of valid alternatives.

use super::error::InvalidChoiceError;

macro_rules! allow_list {
    (
        $(#[$meta:meta])*
        $name:ident as $field:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every allowed value, in catalogue order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(InvalidChoiceError::not_allowed(
                        $field,
                        s,
                        Self::ALL.iter().map(|v| v.as_str()),
                    )),
                }
            }
        }
    };
}

allow_list! {
    /// Polly free-tier voices
    Voice as "voice" {
        Aditi => "Aditi",
        Amy => "Amy",
        Astrid => "Astrid",
        Bianca => "Bianca",
        Brian => "Brian",
        Camila => "Camila",
        Carla => "Carla",
        Carmen => "Carmen",
        Celine => "Celine",
        Chantal => "Chantal",
        Conchita => "Conchita",
        Cristiano => "Cristiano",
        Dora => "Dora",
        Emma => "Emma",
        Enrique => "Enrique",
        Ewa => "Ewa",
        Filiz => "Filiz",
        Gabrielle => "Gabrielle",
        Geraint => "Geraint",
        Giorgio => "Giorgio",
        Gwyneth => "Gwyneth",
        Hans => "Hans",
        Ines => "Ines",
        Ivy => "Ivy",
        Jacek => "Jacek",
        Jan => "Jan",
        Joanna => "Joanna",
        Joey => "Joey",
        Justin => "Justin",
        Karl => "Karl",
        Kendra => "Kendra",
        Kevin => "Kevin",
        Kimberly => "Kimberly",
        Lea => "Lea",
        Liv => "Liv",
        Lotte => "Lotte",
        Lucia => "Lucia",
        Lupe => "Lupe",
        Mads => "Mads",
        Maja => "Maja",
        Marlene => "Marlene",
        Mathieu => "Mathieu",
        Matthew => "Matthew",
        Maxim => "Maxim",
        Mia => "Mia",
        Miguel => "Miguel",
        Mizuki => "Mizuki",
        Naja => "Naja",
        Nicole => "Nicole",
        Olivia => "Olivia",
        Penelope => "Penelope",
        Raveena => "Raveena",
        Ricardo => "Ricardo",
        Ruben => "Ruben",
        Russell => "Russell",
        Salli => "Salli",
        Seoyeon => "Seoyeon",
        Takumi => "Takumi",
        Tatyana => "Tatyana",
        Vicki => "Vicki",
        Vitoria => "Vitoria",
        Zeina => "Zeina",
        Zhiyu => "Zhiyu",
    }
}

allow_list! {
    /// English locale codes, one per regional accent
    Accent as "accent" {
        EnAu => "en-AU",
        EnIn => "en-IN",
        EnIe => "en-IE",
        EnNz => "en-NZ",
        EnZa => "en-ZA",
        EnGb => "en-GB",
        EnUs => "en-US",
        EnGbWls => "en-GB-WLS",
    }
}

allow_list! {
    OutputFormat as "output format" {
        Json => "json",
        Mp3 => "mp3",
        OggVorbis => "ogg_vorbis",
        Pcm => "pcm",
    }
}

allow_list! {
    SampleRate as "sample rate" {
        Hz8000 => "8000",
        Hz16000 => "16000",
        Hz22050 => "22050",
        Hz24000 => "24000",
    }
}

impl Default for Voice {
    fn default() -> Self {
        Voice::Joanna
    }
}

impl Default for Accent {
    fn default() -> Self {
        Accent::EnUs
    }
}

impl Accent {
    /// Human-readable accent name
    pub fn display_name(&self) -> &'static str {
        match self {
            Accent::EnAu => "Australian",
            Accent::EnIn => "Indian",
            Accent::EnIe => "Irish",
            Accent::EnNz => "New Zealander Kiwi",
            Accent::EnZa => "South African",
            Accent::EnGb => "English",
            Accent::EnUs => "American",
            Accent::EnGbWls => "Welsh",
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Mp3
    }
}

impl OutputFormat {
    /// File extension of the artifact written for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Mp3 => "mp3",
            OutputFormat::OggVorbis => "ogg",
            OutputFormat::Pcm => "pcm",
        }
    }

    /// Sample rates the provider accepts for this format.
    /// Raw PCM is only produced at 8 kHz and 16 kHz.
    pub fn supported_sample_rates(&self) -> &'static [SampleRate] {
        match self {
            OutputFormat::Pcm => &[SampleRate::Hz8000, SampleRate::Hz16000],
            _ => SampleRate::ALL,
        }
    }

    pub fn supports(&self, rate: SampleRate) -> bool {
        self.supported_sample_rates().contains(&rate)
    }

    /// Reject a format/rate pair the provider would refuse
    pub fn check_sample_rate(&self, rate: SampleRate) -> Result<(), InvalidChoiceError> {
        if self.supports(rate) {
            return Ok(());
        }
        Err(InvalidChoiceError::FormatRateMismatch {
            format: self.as_str().to_string(),
            rate: rate.as_str().to_string(),
            valid: self
                .supported_sample_rates()
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
        })
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        SampleRate::Hz16000
    }
}
