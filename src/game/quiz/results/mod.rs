
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tier {
    Perfect,
    Close,
    Encouraging,
    TryAgain,
}

impl Tier {
    /// Buckets `score / total` into a tier.
    ///
    /// Thresholds are inclusive on their lower bound: 70% is `Close`, 40% is
    /// `Encouraging`. An empty quiz has no ratio and lands in `TryAgain`.
    pub fn from_score(score: usize, total: usize) -> Tier {
        if total == 0 {
            return Tier::TryAgain;
        }
        if score >= total {
            Tier::Perfect
        } else if score * 10 >= total * 7 {
            Tier::Close
        } else if score * 10 >= total * 4 {
            Tier::Encouraging
        } else {
            Tier::TryAgain
        }
    }

    pub fn get_message(&self) -> &'static str {
        match self {
            Tier::Perfect => "Amazing! A perfect score!",
            Tier::Close => "So close! Just a little more!",
            Tier::Encouraging => "Nice effort! Try again!",
            Tier::TryAgain => "Keep at it, you'll do better next time!",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub tier: Tier,
}

impl QuizResult {
    pub fn new(score: usize, total: usize) -> Self {
        QuizResult {
            score,
            total,
            tier: Tier::from_score(score, total),
        }
    }
}
