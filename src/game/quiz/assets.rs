pub const SFX_CORRECT: &'static str = "sounds/correct.mp3";
pub const SFX_INCORRECT: &'static str = "sounds/incorrect.mp3";
