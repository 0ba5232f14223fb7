//! Property tests for the pure derivations: gender capability, the type
//! effectiveness domain, and the personality hash range.

use proptest::prelude::*;

use crate::core::compare::type_effectiveness;
use crate::core::model::GenderProfile;
use crate::core::quiz::personality::{
    personality_type_id, CommunicationAnswer, DecisionAnswer, EnergyAnswer, EnvironmentAnswer,
    GoalAnswer, HobbyAnswer, LifestyleAnswer, PersonalityAnswers, SocialAnswer, StressAnswer,
    ValuesAnswer,
};

const TYPE_TAGS: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// Index 0 is "unanswered"; anything else picks a variant.
fn answers_from_indices(indices: &[u8]) -> PersonalityAnswers {
    fn pick<T: Copy>(options: &[T], index: u8) -> Option<T> {
        if index == 0 {
            None
        } else {
            Some(options[(index as usize - 1) % options.len()])
        }
    }

    PersonalityAnswers {
        energy: pick(
            &[
                EnergyAnswer::Active,
                EnergyAnswer::Relax,
                EnergyAnswer::Balance,
                EnergyAnswer::Adventure,
            ],
            indices[0],
        ),
        social: pick(
            &[
                SocialAnswer::Leader,
                SocialAnswer::Supporter,
                SocialAnswer::Team,
                SocialAnswer::Independent,
            ],
            indices[1],
        ),
        decision: pick(
            &[
                DecisionAnswer::Quick,
                DecisionAnswer::Careful,
                DecisionAnswer::Intuitive,
                DecisionAnswer::Analyze,
            ],
            indices[2],
        ),
        lifestyle: pick(
            &[
                LifestyleAnswer::Challenge,
                LifestyleAnswer::Stable,
                LifestyleAnswer::Variety,
                LifestyleAnswer::Balanced,
            ],
            indices[3],
        ),
        values: pick(
            &[
                ValuesAnswer::Strength,
                ValuesAnswer::Safety,
                ValuesAnswer::Speed,
                ValuesAnswer::Wisdom,
                ValuesAnswer::Harmony,
            ],
            indices[4],
        ),
        stress: pick(
            &[
                StressAnswer::Fight,
                StressAnswer::Defend,
                StressAnswer::Escape,
                StressAnswer::Think,
                StressAnswer::Adapt,
            ],
            indices[5],
        ),
        hobby: pick(
            &[
                HobbyAnswer::Sports,
                HobbyAnswer::Reading,
                HobbyAnswer::Creative,
                HobbyAnswer::Travel,
                HobbyAnswer::Relax,
            ],
            indices[6],
        ),
        communication: pick(
            &[
                CommunicationAnswer::Direct,
                CommunicationAnswer::Careful,
                CommunicationAnswer::Quick,
                CommunicationAnswer::Deep,
                CommunicationAnswer::Friendly,
            ],
            indices[7],
        ),
        goal: pick(
            &[
                GoalAnswer::Success,
                GoalAnswer::Peace,
                GoalAnswer::Growth,
                GoalAnswer::Knowledge,
                GoalAnswer::Balance,
            ],
            indices[8],
        ),
        environment: pick(
            &[
                EnvironmentAnswer::Competitive,
                EnvironmentAnswer::Safe,
                EnvironmentAnswer::Dynamic,
                EnvironmentAnswer::Quiet,
                EnvironmentAnswer::Harmonious,
            ],
            indices[9],
        ),
    }
}

proptest! {
    #[test]
    fn gender_profile_matches_rate_rules(rate in -1i8..=8) {
        let profile = GenderProfile::from_rate(rate);
        prop_assert_eq!(profile.is_genderless, rate == -1);
        if rate >= 0 {
            prop_assert_eq!(profile.has_male, rate != 8);
            prop_assert_eq!(profile.has_female, rate != 0);
        } else {
            prop_assert!(!profile.has_male);
            prop_assert!(!profile.has_female);
        }
    }

    #[test]
    fn effectiveness_stays_in_single_type_domain(
        attacking in 0usize..18,
        first_defending in 0usize..18,
        second_defending in proptest::option::of(0usize..18),
    ) {
        let mut defending = vec![TYPE_TAGS[first_defending].to_string()];
        if let Some(index) = second_defending {
            defending.push(TYPE_TAGS[index].to_string());
        }
        let multiplier = type_effectiveness(TYPE_TAGS[attacking], &defending);
        prop_assert!([0.25, 0.5, 1.0, 2.0, 4.0].contains(&multiplier));
    }

    #[test]
    fn personality_id_always_lands_in_catalog(indices in proptest::collection::vec(0u8..8, 10)) {
        let answers = answers_from_indices(&indices);
        let id = personality_type_id(&answers);
        prop_assert!((1..=151).contains(&id));
        // Same answers, same id.
        prop_assert_eq!(id, personality_type_id(&answers));
    }
}
