use serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, FromFormField, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    #[default]
    #[field(value = "EASY")]
    Easy,
    #[field(value = "MODERATE")]
    Moderate,
    #[field(value = "KIND_OF_HARD")]
    KindOfHard,
    #[field(value = "HARD")]
    Hard
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::KindOfHard, Difficulty::Hard];

    /// The value submitted by recipe forms.
    pub fn value(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Moderate => "MODERATE",
            Difficulty::KindOfHard => "KIND_OF_HARD",
            Difficulty::Hard => "HARD"
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::KindOfHard => "Kind of hard",
            Difficulty::Hard => "Hard"
        }
    }
}
