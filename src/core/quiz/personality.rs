//! Personality-axis quiz: a closed-form hash into the id space.
//!
//! Each of the 10 questions assigns its selected option a small integer
//! weight (its 1-based position); the weighted sum over a fixed prime per
//! question position, taken mod 151 plus 1, is the result id. This is a
//! hash, not a search: the same answers always land on the same id.
//! Unanswered questions weigh 1.

use serde::{Deserialize, Serialize};

use crate::core::model::Pokemon;
use crate::core::quiz::{Question, QuestionOption, Trait, TRAIT_ORDER};

/// One prime per question position, in fixed question order. Distinct
/// primes spread the 151 result ids across answer combinations.
pub const QUESTION_PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Size of the id space the hash lands in.
pub const CATALOG_SPAN: u64 = 151;

// ============================================================================
// Answer Vocabulary
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyAnswer {
    Active,
    Relax,
    Balance,
    Adventure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialAnswer {
    Leader,
    Supporter,
    Team,
    Independent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAnswer {
    Quick,
    Careful,
    Intuitive,
    Analyze,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifestyleAnswer {
    Challenge,
    Stable,
    Variety,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuesAnswer {
    Strength,
    Safety,
    Speed,
    Wisdom,
    Harmony,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressAnswer {
    Fight,
    Defend,
    Escape,
    Think,
    Adapt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HobbyAnswer {
    Sports,
    Reading,
    Creative,
    Travel,
    Relax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationAnswer {
    Direct,
    Careful,
    Quick,
    Deep,
    Friendly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalAnswer {
    Success,
    Peace,
    Growth,
    Knowledge,
    Balance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentAnswer {
    Competitive,
    Safe,
    Dynamic,
    Quiet,
    Harmonious,
}

macro_rules! answer_tables {
    ($($answer:ident { $($variant:ident => $weight:expr, $axis:ident;)+ })+) => {
        $(impl $answer {
            /// 1-based option position, the hash weight.
            pub fn weight(self) -> u64 {
                match self {
                    $(Self::$variant => $weight,)+
                }
            }

            /// Personality axis the option leans toward.
            pub fn axis(self) -> Trait {
                match self {
                    $(Self::$variant => Trait::$axis,)+
                }
            }
        })+
    };
}

answer_tables! {
    EnergyAnswer {
        Active => 1, Aggressive;
        Relax => 2, Defensive;
        Balance => 3, Balanced;
        Adventure => 4, Speed;
    }
    SocialAnswer {
        Leader => 1, Aggressive;
        Supporter => 2, Defensive;
        Team => 3, Balanced;
        Independent => 4, Speed;
    }
    DecisionAnswer {
        Quick => 1, Speed;
        Careful => 2, Defensive;
        Intuitive => 3, Aggressive;
        Analyze => 4, Special;
    }
    LifestyleAnswer {
        Challenge => 1, Aggressive;
        Stable => 2, Defensive;
        Variety => 3, Speed;
        Balanced => 4, Balanced;
    }
    ValuesAnswer {
        Strength => 1, Aggressive;
        Safety => 2, Defensive;
        Speed => 3, Speed;
        Wisdom => 4, Special;
        Harmony => 5, Balanced;
    }
    StressAnswer {
        Fight => 1, Aggressive;
        Defend => 2, Defensive;
        Escape => 3, Speed;
        Think => 4, Special;
        Adapt => 5, Balanced;
    }
    HobbyAnswer {
        Sports => 1, Aggressive;
        Reading => 2, Special;
        Creative => 3, Balanced;
        Travel => 4, Speed;
        Relax => 5, Defensive;
    }
    CommunicationAnswer {
        Direct => 1, Aggressive;
        Careful => 2, Defensive;
        Quick => 3, Speed;
        Deep => 4, Special;
        Friendly => 5, Balanced;
    }
    GoalAnswer {
        Success => 1, Aggressive;
        Peace => 2, Defensive;
        Growth => 3, Speed;
        Knowledge => 4, Special;
        Balance => 5, Balanced;
    }
    EnvironmentAnswer {
        Competitive => 1, Aggressive;
        Safe => 2, Defensive;
        Dynamic => 3, Speed;
        Quiet => 4, Special;
        Harmonious => 5, Balanced;
    }
}

/// Selected answers, one per personality axis question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityAnswers {
    pub energy: Option<EnergyAnswer>,
    pub social: Option<SocialAnswer>,
    pub decision: Option<DecisionAnswer>,
    pub lifestyle: Option<LifestyleAnswer>,
    pub values: Option<ValuesAnswer>,
    pub stress: Option<StressAnswer>,
    pub hobby: Option<HobbyAnswer>,
    pub communication: Option<CommunicationAnswer>,
    pub goal: Option<GoalAnswer>,
    pub environment: Option<EnvironmentAnswer>,
}

impl PersonalityAnswers {
    /// Hash weights in fixed question order; unanswered questions weigh 1.
    fn weights(&self) -> [u64; 10] {
        [
            self.energy.map_or(1, EnergyAnswer::weight),
            self.social.map_or(1, SocialAnswer::weight),
            self.decision.map_or(1, DecisionAnswer::weight),
            self.lifestyle.map_or(1, LifestyleAnswer::weight),
            self.values.map_or(1, ValuesAnswer::weight),
            self.stress.map_or(1, StressAnswer::weight),
            self.hobby.map_or(1, HobbyAnswer::weight),
            self.communication.map_or(1, CommunicationAnswer::weight),
            self.goal.map_or(1, GoalAnswer::weight),
            self.environment.map_or(1, EnvironmentAnswer::weight),
        ]
    }

    /// Axes of the answered questions only.
    fn axes(&self) -> Vec<Trait> {
        let mut axes = Vec::new();
        if let Some(answer) = self.energy {
            axes.push(answer.axis());
        }
        if let Some(answer) = self.social {
            axes.push(answer.axis());
        }
        if let Some(answer) = self.decision {
            axes.push(answer.axis());
        }
        if let Some(answer) = self.lifestyle {
            axes.push(answer.axis());
        }
        if let Some(answer) = self.values {
            axes.push(answer.axis());
        }
        if let Some(answer) = self.stress {
            axes.push(answer.axis());
        }
        if let Some(answer) = self.hobby {
            axes.push(answer.axis());
        }
        if let Some(answer) = self.communication {
            axes.push(answer.axis());
        }
        if let Some(answer) = self.goal {
            axes.push(answer.axis());
        }
        if let Some(answer) = self.environment {
            axes.push(answer.axis());
        }
        axes
    }
}

// ============================================================================
// Hash and Resolution
// ============================================================================

/// The deterministic result id for an answer set: (Σ weight·prime mod 151) + 1.
pub fn personality_type_id(answers: &PersonalityAnswers) -> u32 {
    let hash: u64 = answers
        .weights()
        .iter()
        .zip(QUESTION_PRIMES.iter())
        .map(|(weight, prime)| weight * prime)
        .sum();
    ((hash % CATALOG_SPAN) + 1) as u32
}

/// Dominant personality axis across the answered questions. Ties keep the
/// later axis in the fixed enumeration order.
pub fn dominant_trait(answers: &PersonalityAnswers) -> Trait {
    let axes = answers.axes();
    let count = |wanted: Trait| axes.iter().filter(|axis| **axis == wanted).count();

    let mut dominant = TRAIT_ORDER[0];
    for candidate in TRAIT_ORDER.into_iter().skip(1) {
        if count(candidate) >= count(dominant) {
            dominant = candidate;
        }
    }
    dominant
}

/// Quiz result: matched candidate, its personality-type label, a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalityResult<'a> {
    pub pokemon: &'a Pokemon,
    pub type_id: u32,
    pub type_label: String,
    pub comment: String,
}

/// Resolve an answer set against a candidate list. The computed id should
/// always be present in a full 151-entry set; if it is not, the first
/// candidate stands in. `None` only for an empty set.
pub fn resolve<'a>(
    candidates: &'a [Pokemon],
    answers: &PersonalityAnswers,
) -> Option<PersonalityResult<'a>> {
    let type_id = personality_type_id(answers);
    let pokemon = candidates
        .iter()
        .find(|candidate| candidate.id == type_id)
        .or_else(|| {
            log::debug!("no candidate with id {type_id}, using the first entry");
            candidates.first()
        })?;

    Some(PersonalityResult {
        pokemon,
        type_id,
        type_label: format!("{}型", pokemon.display_name),
        comment: comment(pokemon, answers),
    })
}

// ============================================================================
// Result Comment
// ============================================================================

fn type_phrase(primary: &str) -> Option<&'static str> {
    let phrase = match primary {
        "fire" => "情熱的でエネルギッシュな性格",
        "water" => "柔軟で適応力の高い性格",
        "grass" => "成長を大切にする穏やかな性格",
        "electric" => "行動力があり、スピード感のある性格",
        "psychic" => "知性的で深く考える性格",
        "ice" => "冷静で落ち着いた性格",
        "dragon" => "力強く、リーダーシップのある性格",
        "dark" => "神秘的で独立心の強い性格",
        "fairy" => "優しく、調和を大切にする性格",
        "normal" => "バランスが取れた安定した性格",
        "fighting" => "正義感が強く、努力を惜しまない性格",
        "poison" => "独特な魅力と、強い個性を持つ性格",
        "ground" => "堅実で、地に足のついた性格",
        "flying" => "自由を愛し、広い視野を持つ性格",
        "bug" => "努力家で、粘り強く取り組む性格",
        "rock" => "堅実で、安定感のある性格",
        "ghost" => "神秘的で、深い洞察力を持つ性格",
        "steel" => "強靭で、困難に立ち向かう性格",
        _ => return None,
    };
    Some(phrase)
}

/// Build the result comment from the fixed ordered rule list: primary type,
/// dominant trait against the matching stat, height class, aggregate class,
/// with one default phrase when nothing fires.
pub fn comment(pokemon: &Pokemon, answers: &PersonalityAnswers) -> String {
    let total = pokemon.total_stats();
    let dominant = dominant_trait(answers);
    let mut phrases: Vec<&str> = Vec::new();

    if let Some(phrase) = type_phrase(pokemon.primary_type()) {
        phrases.push(phrase);
    }

    if dominant == Trait::Aggressive && pokemon.stat("attack") > 80 {
        phrases.push("積極的に行動し、目標に向かって突き進む力があります");
    } else if dominant == Trait::Defensive && pokemon.stat("defense") > 80 {
        phrases.push("慎重で、周囲を守ることを大切にします");
    } else if dominant == Trait::Speed && pokemon.stat("speed") > 80 {
        phrases.push("素早い判断力と行動力を持っています");
    } else if dominant == Trait::Special && pokemon.stat("special-attack") > 80 {
        phrases.push("知的な判断と深い思考力があります");
    } else if total > 500 {
        phrases.push("バランスの取れた能力を持っています");
    }

    if pokemon.height_m < 0.5 {
        phrases.push("小さくても、その存在感は抜群です");
    } else if pokemon.height_m >= 1.5 {
        phrases.push("堂々とした風格と、人を惹きつける魅力があります");
    }

    if total > 580 {
        phrases.push("非常に高い潜在能力を持っており、どんな困難にも立ち向かえる強さがあります");
    } else if total < 350 {
        phrases.push("シンプルで純粋な魅力があり、周囲に優しい影響を与えます");
    }

    if phrases.is_empty() {
        phrases.push("あなたの個性が、このポケモンとぴったり合っています");
    }

    format!("{}。", phrases.join("。"))
}

// ============================================================================
// Question Catalog
// ============================================================================

pub const QUESTIONS: [Question; 10] = [
    Question {
        id: "energy",
        prompt: "休日の過ごし方は？",
        options: &[
            QuestionOption { value: "active", label: "アクティブに活動する", axis: Some(Trait::Aggressive) },
            QuestionOption { value: "relax", label: "のんびりと過ごす", axis: Some(Trait::Defensive) },
            QuestionOption { value: "balance", label: "バランスよく過ごす", axis: Some(Trait::Balanced) },
            QuestionOption { value: "adventure", label: "新しいことに挑戦する", axis: Some(Trait::Speed) },
        ],
    },
    Question {
        id: "social",
        prompt: "人との関わり方は？",
        options: &[
            QuestionOption { value: "leader", label: "リーダーシップを取る", axis: Some(Trait::Aggressive) },
            QuestionOption { value: "supporter", label: "サポート役を好む", axis: Some(Trait::Defensive) },
            QuestionOption { value: "team", label: "チームで協力する", axis: Some(Trait::Balanced) },
            QuestionOption { value: "independent", label: "一人で行動する", axis: Some(Trait::Speed) },
        ],
    },
    Question {
        id: "decision",
        prompt: "重要な決断をする時は？",
        options: &[
            QuestionOption { value: "quick", label: "素早く決断する", axis: Some(Trait::Speed) },
            QuestionOption { value: "careful", label: "慎重に考える", axis: Some(Trait::Defensive) },
            QuestionOption { value: "intuitive", label: "直感で決める", axis: Some(Trait::Aggressive) },
            QuestionOption { value: "analyze", label: "じっくり分析する", axis: Some(Trait::Special) },
        ],
    },
    Question {
        id: "lifestyle",
        prompt: "理想の生活スタイルは？",
        options: &[
            QuestionOption { value: "challenge", label: "チャレンジングな毎日", axis: Some(Trait::Aggressive) },
            QuestionOption { value: "stable", label: "安定した生活", axis: Some(Trait::Defensive) },
            QuestionOption { value: "variety", label: "変化に富んだ生活", axis: Some(Trait::Speed) },
            QuestionOption { value: "balanced", label: "バランスの取れた生活", axis: Some(Trait::Balanced) },
        ],
    },
    Question {
        id: "values",
        prompt: "最も大切にしていることは？",
        options: &[
            QuestionOption { value: "strength", label: "強さ・実力", axis: Some(Trait::Aggressive) },
            QuestionOption { value: "safety", label: "安全・安定", axis: Some(Trait::Defensive) },
            QuestionOption { value: "speed", label: "スピード・効率", axis: Some(Trait::Speed) },
            QuestionOption { value: "wisdom", label: "知恵・知識", axis: Some(Trait::Special) },
            QuestionOption { value: "harmony", label: "調和・バランス", axis: Some(Trait::Balanced) },
        ],
    },
    Question {
        id: "stress",
        prompt: "ストレスを感じた時の対処法は？",
        options: &[
            QuestionOption { value: "fight", label: "正面から向き合う", axis: Some(Trait::Aggressive) },
            QuestionOption { value: "defend", label: "身を守る", axis: Some(Trait::Defensive) },
            QuestionOption { value: "escape", label: "一時的に距離を置く", axis: Some(Trait::Speed) },
            QuestionOption { value: "think", label: "冷静に分析する", axis: Some(Trait::Special) },
            QuestionOption { value: "adapt", label: "柔軟に対応する", axis: Some(Trait::Balanced) },
        ],
    },
    Question {
        id: "hobby",
        prompt: "趣味や好きなことは？",
        options: &[
            QuestionOption { value: "sports", label: "スポーツ・運動", axis: Some(Trait::Aggressive) },
            QuestionOption { value: "reading", label: "読書・勉強", axis: Some(Trait::Special) },
            QuestionOption { value: "creative", label: "創作活動", axis: Some(Trait::Balanced) },
            QuestionOption { value: "travel", label: "旅行・冒険", axis: Some(Trait::Speed) },
            QuestionOption { value: "relax", label: "リラックス・休息", axis: Some(Trait::Defensive) },
        ],
    },
    Question {
        id: "communication",
        prompt: "コミュニケーションの取り方は？",
        options: &[
            QuestionOption { value: "direct", label: "直接的にはっきりと", axis: Some(Trait::Aggressive) },
            QuestionOption { value: "careful", label: "慎重に言葉を選ぶ", axis: Some(Trait::Defensive) },
            QuestionOption { value: "quick", label: "素早く簡潔に", axis: Some(Trait::Speed) },
            QuestionOption { value: "deep", label: "深くじっくりと", axis: Some(Trait::Special) },
            QuestionOption { value: "friendly", label: "親しみやすく", axis: Some(Trait::Balanced) },
        ],
    },
    Question {
        id: "goal",
        prompt: "人生の目標は？",
        options: &[
            QuestionOption { value: "success", label: "成功・達成", axis: Some(Trait::Aggressive) },
            QuestionOption { value: "peace", label: "平穏・安定", axis: Some(Trait::Defensive) },
            QuestionOption { value: "growth", label: "成長・向上", axis: Some(Trait::Speed) },
            QuestionOption { value: "knowledge", label: "知識・理解", axis: Some(Trait::Special) },
            QuestionOption { value: "balance", label: "バランス・調和", axis: Some(Trait::Balanced) },
        ],
    },
    Question {
        id: "environment",
        prompt: "理想の環境は？",
        options: &[
            QuestionOption { value: "competitive", label: "競争的な環境", axis: Some(Trait::Aggressive) },
            QuestionOption { value: "safe", label: "安全で守られた環境", axis: Some(Trait::Defensive) },
            QuestionOption { value: "dynamic", label: "動的で変化のある環境", axis: Some(Trait::Speed) },
            QuestionOption { value: "quiet", label: "静かで落ち着いた環境", axis: Some(Trait::Special) },
            QuestionOption { value: "harmonious", label: "調和の取れた環境", axis: Some(Trait::Balanced) },
        ],
    },
];
