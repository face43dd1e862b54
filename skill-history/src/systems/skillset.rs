use crate::data_processing::NUM_SKILLSETS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The skill categories a score is rated in, in the order they appear in score logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skillset {
    Stream,
    Jumpstream,
    Handstream,
    Stamina,
    JackSpeed,
    Chordjack,
    Technical,
}

impl Skillset {
    pub const ALL: [Skillset; NUM_SKILLSETS] = [
        Skillset::Stream,
        Skillset::Jumpstream,
        Skillset::Handstream,
        Skillset::Stamina,
        Skillset::JackSpeed,
        Skillset::Chordjack,
        Skillset::Technical,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Skillset::Stream => "Stream",
            Skillset::Jumpstream => "Jumpstream",
            Skillset::Handstream => "Handstream",
            Skillset::Stamina => "Stamina",
            Skillset::JackSpeed => "JackSpeed",
            Skillset::Chordjack => "Chordjack",
            Skillset::Technical => "Technical",
        }
    }
}

impl fmt::Display for Skillset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_indices_follow_log_order() {
        for (i, skillset) in Skillset::ALL.iter().enumerate() {
            assert_eq!(skillset.index(), i);
        }
        assert_eq!(Skillset::Technical.to_string(), "Technical");
    }
}
