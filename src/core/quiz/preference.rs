//! Trait/preference quiz: additive scoring over the full candidate set.
//!
//! Two difficulty modes share one question superset: simple mode asks the
//! first 5 questions, detailed mode all 10. Every contribution rule keys
//! off one answer value, evaluates independently, and adds to a floating
//! point score; the candidate with the strictly highest total wins, ties
//! resolving to the earlier entry in catalog order.

use serde::{Deserialize, Serialize};

use crate::core::model::Pokemon;
use crate::core::quiz::{Question, QuestionOption, Trait};

/// Creatures with no further evolution in the first-generation catalog.
/// Not derivable from any field the API exposes here; kept literal.
const NO_EVOLUTION_IDS: [u32; 36] = [
    83, 106, 107, 108, 113, 115, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134,
    135, 136, 137, 138, 139, 140, 141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151,
];

/// Legendary and mythical entries of the first-generation catalog.
const LEGENDARY_IDS: [u32; 5] = [144, 145, 146, 150, 151];

/// Quiz difficulty mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Simple,
    Detailed,
}

impl Mode {
    /// Mode-dependent coefficient.
    fn pick(self, simple: f64, detailed: f64) -> f64 {
        match self {
            Mode::Simple => simple,
            Mode::Detailed => detailed,
        }
    }
}

// ============================================================================
// Answer Vocabulary
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Cute,
    Cool,
    Strong,
    Mysterious,
    Elegant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BattleStyle {
    FirstStrike,
    Endurance,
    OneHit,
    Support,
    Versatile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvolutionStage {
    Basic,
    Middle,
    Final,
    NoEvolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightClass {
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Battle,
    Care,
    Collection,
    Adventure,
}

/// Selected answers; unanswered questions contribute nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceAnswers {
    pub favorite_type: Option<String>,
    pub personality: Option<Trait>,
    pub preference: Option<Preference>,
    pub size: Option<SizeClass>,
    pub important_stat: Option<String>,
    pub battle_style: Option<BattleStyle>,
    pub evolution_stage: Option<EvolutionStage>,
    pub weight_preference: Option<WeightClass>,
    pub rarity: Option<Rarity>,
    pub purpose: Option<Purpose>,
}

// ============================================================================
// Scoring
// ============================================================================

/// Score one candidate against the answer set. All rules are additive and
/// independent; simple mode skips the detailed-only rules entirely.
pub fn score(pokemon: &Pokemon, answers: &PreferenceAnswers, mode: Mode) -> f64 {
    let mut score = 0.0;
    let total = f64::from(pokemon.total_stats());

    if let Some(favorite) = &answers.favorite_type {
        if pokemon.has_type(favorite) {
            score += mode.pick(40.0, 30.0);
        }
    }

    match answers.personality {
        Some(Trait::Aggressive) => {
            score += f64::from(pokemon.stat("attack")) * mode.pick(0.4, 0.3);
        }
        Some(Trait::Defensive) => {
            let bulk = pokemon.stat("defense") + pokemon.stat("hp");
            score += f64::from(bulk) * mode.pick(0.25, 0.2);
        }
        Some(Trait::Speed) => {
            score += f64::from(pokemon.stat("speed")) * mode.pick(0.4, 0.3);
        }
        Some(Trait::Special) => {
            score += f64::from(pokemon.stat("special-attack")) * mode.pick(0.4, 0.3);
        }
        Some(Trait::Balanced) => {
            score += total * mode.pick(0.06, 0.05);
        }
        None => {}
    }

    match answers.preference {
        Some(Preference::Cute) => {
            if pokemon.height_m < 0.5 {
                score += mode.pick(25.0, 20.0);
            }
            if pokemon.has_type("fairy") || pokemon.has_type("normal") {
                score += mode.pick(15.0, 10.0);
            }
        }
        Some(Preference::Cool) => {
            if pokemon.has_type("dragon") || pokemon.has_type("fire") || pokemon.has_type("electric")
            {
                score += mode.pick(20.0, 15.0);
            }
        }
        Some(Preference::Strong) => {
            if total > 500.0 {
                score += mode.pick(25.0, 20.0);
            }
        }
        Some(Preference::Mysterious) => {
            if pokemon.has_type("ghost") || pokemon.has_type("psychic") || pokemon.has_type("dark")
            {
                score += mode.pick(20.0, 15.0);
            }
        }
        Some(Preference::Elegant) => {
            if pokemon.has_type("fairy") || pokemon.has_type("psychic") {
                score += mode.pick(20.0, 15.0);
            }
        }
        None => {}
    }

    if mode == Mode::Detailed {
        match answers.size {
            Some(SizeClass::Small) if pokemon.height_m < 0.5 => score += 20.0,
            Some(SizeClass::Medium) if (0.5..1.5).contains(&pokemon.height_m) => score += 20.0,
            Some(SizeClass::Large) if pokemon.height_m >= 1.5 => score += 20.0,
            _ => {}
        }
    }

    if let Some(stat_name) = &answers.important_stat {
        let value = pokemon.stat(stat_name);
        if value > 0 {
            score += f64::from(value) * mode.pick(0.3, 0.4);
        }
    }

    if mode == Mode::Detailed {
        match answers.battle_style {
            Some(BattleStyle::FirstStrike) => {
                score += f64::from(pokemon.stat("speed")) * 0.2;
            }
            Some(BattleStyle::Endurance) => {
                let bulk = pokemon.stat("hp") + pokemon.stat("defense");
                score += f64::from(bulk) * 0.15;
            }
            Some(BattleStyle::OneHit) => {
                let strike = pokemon.stat("attack").max(pokemon.stat("special-attack"));
                score += f64::from(strike) * 0.2;
            }
            Some(BattleStyle::Versatile) => {
                score += total * 0.03;
            }
            Some(BattleStyle::Support) | None => {}
        }

        match answers.evolution_stage {
            // First-generation lines are mostly 3 stages; the id modulus is
            // a heuristic, the no-evolution list is literal.
            Some(EvolutionStage::Basic) if pokemon.id <= 151 && pokemon.id % 3 == 1 => {
                score += 15.0;
            }
            Some(EvolutionStage::Final) if pokemon.id <= 151 && pokemon.id % 3 == 0 => {
                score += 15.0;
            }
            Some(EvolutionStage::NoEvolution) if NO_EVOLUTION_IDS.contains(&pokemon.id) => {
                score += 15.0;
            }
            _ => {}
        }

        match answers.weight_preference {
            Some(WeightClass::Light) if pokemon.weight_kg < 10.0 => score += 15.0,
            Some(WeightClass::Medium) if (10.0..50.0).contains(&pokemon.weight_kg) => {
                score += 15.0;
            }
            Some(WeightClass::Heavy) if pokemon.weight_kg >= 50.0 => score += 15.0,
            _ => {}
        }

        match answers.rarity {
            Some(Rarity::Legendary) => {
                if LEGENDARY_IDS.contains(&pokemon.id) || total > 580.0 {
                    score += 20.0;
                }
            }
            Some(Rarity::Common) => {
                if total < 400.0 {
                    score += 15.0;
                }
            }
            Some(Rarity::Rare) => {
                if (400.0..=580.0).contains(&total) {
                    score += 15.0;
                }
            }
            None => {}
        }

        match answers.purpose {
            Some(Purpose::Battle) => {
                if total > 450.0 {
                    score += 15.0;
                }
            }
            Some(Purpose::Care) => {
                if pokemon.height_m < 0.6
                    || pokemon.has_type("fairy")
                    || pokemon.has_type("normal")
                {
                    score += 15.0;
                }
            }
            Some(Purpose::Collection) => {
                score += 10.0;
            }
            Some(Purpose::Adventure) => {
                if (350.0..=550.0).contains(&total) {
                    score += 15.0;
                }
            }
            None => {}
        }
    }

    score
}

/// Quiz result: the winning candidate, its score, and a generated comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub pokemon: &'a Pokemon,
    pub score: f64,
    pub comment: String,
}

/// Pick the candidate with the strictly highest score. Equal scores resolve
/// to the earlier candidate; `None` only for an empty set.
pub fn recommend<'a>(
    candidates: &'a [Pokemon],
    answers: &PreferenceAnswers,
    mode: Mode,
) -> Option<Recommendation<'a>> {
    let mut best: Option<(&Pokemon, f64)> = None;
    for candidate in candidates {
        let candidate_score = score(candidate, answers, mode);
        match best {
            Some((_, best_score)) if candidate_score <= best_score => {}
            _ => best = Some((candidate, candidate_score)),
        }
    }
    best.map(|(pokemon, winning_score)| Recommendation {
        pokemon,
        score: winning_score,
        comment: comment(pokemon, answers),
    })
}

// ============================================================================
// Result Comment
// ============================================================================

fn type_phrase(primary: &str) -> Option<&'static str> {
    let phrase = match primary {
        "fire" => "情熱的でエネルギッシュ",
        "water" => "柔軟で適応力が高い",
        "grass" => "成長を大切にする穏やかさ",
        "electric" => "行動力がありスピード感がある",
        "psychic" => "知性的で深く考える",
        "ice" => "冷静で落ち着いている",
        "dragon" => "力強くリーダーシップがある",
        "dark" => "神秘的で独立心が強い",
        "fairy" => "優しく調和を大切にする",
        "normal" => "バランスが取れて安定している",
        "fighting" => "正義感が強く努力を惜しまない",
        "poison" => "独特な魅力と強い個性を持つ",
        "ground" => "堅実で地に足がついている",
        "flying" => "自由を愛し広い視野を持つ",
        "bug" => "努力家で粘り強い",
        "rock" => "堅実で安定感がある",
        "ghost" => "神秘的で深い洞察力を持つ",
        "steel" => "強靭で困難に立ち向かう",
        _ => return None,
    };
    Some(phrase)
}

/// Build the result comment by scanning the fixed rule list in order and
/// period-joining every phrase whose condition holds.
pub fn comment(pokemon: &Pokemon, answers: &PreferenceAnswers) -> String {
    let total = pokemon.total_stats();
    let mut phrases: Vec<String> = Vec::new();

    if let Some(phrase) = type_phrase(pokemon.primary_type()) {
        phrases.push(format!("あなたは{phrase}性格です"));
    }

    match answers.preference {
        Some(Preference::Cute) => {
            phrases.push("かわいらしいものを好む、優しい心の持ち主です".to_string());
        }
        Some(Preference::Cool) => {
            phrases.push("かっこいいものを好む、スタイリッシュなセンスがあります".to_string());
        }
        Some(Preference::Strong) => {
            phrases.push("強さを重視する、向上心が高い性格です".to_string());
        }
        Some(Preference::Mysterious) => {
            phrases.push("神秘的で奥深い魅力に惹かれる、独特な感性を持っています".to_string());
        }
        Some(Preference::Elegant) => {
            phrases.push("優雅さを好む、上品で洗練された性格です".to_string());
        }
        None => {}
    }

    match answers.personality {
        Some(Trait::Aggressive) => {
            phrases.push("積極的に行動し、目標に向かって突き進む力があります".to_string());
        }
        Some(Trait::Defensive) => {
            phrases.push("慎重で、周囲を守ることを大切にします".to_string());
        }
        Some(Trait::Speed) => {
            phrases.push("素早い判断力と行動力を持っています".to_string());
        }
        Some(Trait::Special) => {
            phrases.push("知的な判断と深い思考力があります".to_string());
        }
        Some(Trait::Balanced) => {
            phrases.push("バランスの取れた能力を持っています".to_string());
        }
        None => {}
    }

    if total > 580 {
        phrases.push(
            "非常に高い潜在能力を持っており、どんな困難にも立ち向かえる強さがあります".to_string(),
        );
    } else if total < 350 {
        phrases.push("シンプルで純粋な魅力があり、周囲に優しい影響を与えます".to_string());
    }

    if phrases.is_empty() {
        phrases.push("あなたの個性が、このポケモンとぴったり合っています".to_string());
    }

    format!("{}。", phrases.join("。"))
}

// ============================================================================
// Question Catalog
// ============================================================================

/// The full 10-question set; the simple mode asks the first 5.
pub const QUESTIONS: [Question; 10] = [
    Question {
        id: "favorite_type",
        prompt: "好きなタイプは？",
        options: &[
            QuestionOption { value: "fire", label: "ほのお", axis: None },
            QuestionOption { value: "water", label: "みず", axis: None },
            QuestionOption { value: "grass", label: "くさ", axis: None },
            QuestionOption { value: "electric", label: "でんき", axis: None },
            QuestionOption { value: "psychic", label: "エスパー", axis: None },
            QuestionOption { value: "ice", label: "こおり", axis: None },
            QuestionOption { value: "dragon", label: "ドラゴン", axis: None },
            QuestionOption { value: "dark", label: "あく", axis: None },
            QuestionOption { value: "fairy", label: "フェアリー", axis: None },
            QuestionOption { value: "normal", label: "ノーマル", axis: None },
        ],
    },
    Question {
        id: "personality",
        prompt: "あなたの性格は？",
        options: &[
            QuestionOption { value: "aggressive", label: "攻撃的", axis: None },
            QuestionOption { value: "defensive", label: "防御的", axis: None },
            QuestionOption { value: "balanced", label: "バランス型", axis: None },
            QuestionOption { value: "speed", label: "素早い行動派", axis: None },
            QuestionOption { value: "special", label: "特殊能力重視", axis: None },
        ],
    },
    Question {
        id: "preference",
        prompt: "どのようなポケモンが好きですか？",
        options: &[
            QuestionOption { value: "cute", label: "かわいい", axis: None },
            QuestionOption { value: "cool", label: "かっこいい", axis: None },
            QuestionOption { value: "strong", label: "強そう", axis: None },
            QuestionOption { value: "mysterious", label: "神秘的", axis: None },
            QuestionOption { value: "elegant", label: "優雅", axis: None },
        ],
    },
    Question {
        id: "size",
        prompt: "ポケモンの大きさは？",
        options: &[
            QuestionOption { value: "small", label: "小さい（0.3m〜0.5m）", axis: None },
            QuestionOption { value: "medium", label: "中くらい（0.5m〜1.5m）", axis: None },
            QuestionOption { value: "large", label: "大きい（1.5m以上）", axis: None },
        ],
    },
    Question {
        id: "important_stat",
        prompt: "どのステータスが重要ですか？",
        options: &[
            QuestionOption { value: "hp", label: "HP（体力）", axis: None },
            QuestionOption { value: "attack", label: "攻撃", axis: None },
            QuestionOption { value: "defense", label: "防御", axis: None },
            QuestionOption { value: "special-attack", label: "特攻", axis: None },
            QuestionOption { value: "special-defense", label: "特防", axis: None },
            QuestionOption { value: "speed", label: "素早さ", axis: None },
        ],
    },
    Question {
        id: "battle_style",
        prompt: "バトルスタイルは？",
        options: &[
            QuestionOption { value: "first-strike", label: "先制攻撃重視", axis: None },
            QuestionOption { value: "endurance", label: "持久戦", axis: None },
            QuestionOption { value: "one-hit", label: "一撃必殺", axis: None },
            QuestionOption { value: "support", label: "サポート型", axis: None },
            QuestionOption { value: "versatile", label: "オールラウンド", axis: None },
        ],
    },
    Question {
        id: "evolution_stage",
        prompt: "どの進化段階のポケモンが好きですか？",
        options: &[
            QuestionOption { value: "basic", label: "進化前（かわいい）", axis: None },
            QuestionOption { value: "middle", label: "中間進化（バランス）", axis: None },
            QuestionOption { value: "final", label: "最終進化（強力）", axis: None },
            QuestionOption { value: "no-evolution", label: "進化しない（シンプル）", axis: None },
        ],
    },
    Question {
        id: "weight_preference",
        prompt: "ポケモンの重さは？",
        options: &[
            QuestionOption { value: "light", label: "軽い（10kg以下）", axis: None },
            QuestionOption { value: "medium", label: "普通（10kg〜50kg）", axis: None },
            QuestionOption { value: "heavy", label: "重い（50kg以上）", axis: None },
        ],
    },
    Question {
        id: "rarity",
        prompt: "どのようなレアリティが好きですか？",
        options: &[
            QuestionOption { value: "common", label: "普通（よく見かける）", axis: None },
            QuestionOption { value: "rare", label: "珍しい（見つけにくい）", axis: None },
            QuestionOption { value: "legendary", label: "伝説・幻（非常に珍しい）", axis: None },
        ],
    },
    Question {
        id: "purpose",
        prompt: "ポケモンとの関わり方は？",
        options: &[
            QuestionOption { value: "battle", label: "バトルで活躍させる", axis: None },
            QuestionOption { value: "care", label: "かわいがる", axis: None },
            QuestionOption { value: "collection", label: "コレクション", axis: None },
            QuestionOption { value: "adventure", label: "冒険のパートナー", axis: None },
        ],
    },
];

/// Questions asked in the given mode.
pub fn questions(mode: Mode) -> &'static [Question] {
    match mode {
        Mode::Simple => &QUESTIONS[..5],
        Mode::Detailed => &QUESTIONS[..],
    }
}
