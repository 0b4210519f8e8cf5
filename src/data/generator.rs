//! Mock data generation.
//!
//! Every generator takes the RNG as an explicit parameter so callers can
//! inject a seeded `StdRng` for reproducible output. Generators have no
//! side effects and may be re-invoked; each call returns fresh collections.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use super::model::{
    AiModel, Climate, ComplianceReport, Crossing, CrossingStatus, Dataset, FeaturedProject,
    ForumTopic, ModelStatus, Notification, PredictedTrait, Resistance, ReviewKind, ReviewStatus,
    Severity, Species, SpeciesStatus, TrainingRun, TrainingStatus,
};

/// Number of crossing experiments seeded at startup.
pub const CROSSING_COUNT: usize = 12;

const TRAINING_RUN_COUNT: usize = 8;
const COMPLIANCE_REPORT_COUNT: usize = 8;

struct Archetype {
    name: &'static str,
    scientific: &'static str,
    family: &'static str,
    icon: &'static str,
}

/// The eight plant archetypes the catalog is seeded from, in id order.
const PLANT_ARCHETYPES: [Archetype; 8] = [
    Archetype {
        name: "Tomate",
        scientific: "Solanum lycopersicum",
        family: "Solanaceae",
        icon: "🍅",
    },
    Archetype {
        name: "Milho",
        scientific: "Zea mays",
        family: "Poaceae",
        icon: "🌽",
    },
    Archetype {
        name: "Feijão",
        scientific: "Phaseolus vulgaris",
        family: "Fabaceae",
        icon: "🫘",
    },
    Archetype {
        name: "Trigo",
        scientific: "Triticum aestivum",
        family: "Poaceae",
        icon: "🌾",
    },
    Archetype {
        name: "Soja",
        scientific: "Glycine max",
        family: "Fabaceae",
        icon: "🫛",
    },
    Archetype {
        name: "Arroz",
        scientific: "Oryza sativa",
        family: "Poaceae",
        icon: "🌾",
    },
    Archetype {
        name: "Batata",
        scientific: "Solanum tuberosum",
        family: "Solanaceae",
        icon: "🥔",
    },
    Archetype {
        name: "Cenoura",
        scientific: "Daucus carota",
        family: "Apiaceae",
        icon: "🥕",
    },
];

const FORUM_TOPICS: [&str; 6] = [
    "Otimização de cruzamentos em ambiente tropical",
    "Resistência a pragas em culturas de subsistência",
    "Análise genômica comparativa entre híbridos",
    "Sustentabilidade em melhoramento vegetal",
    "Bioética em modificação genética",
    "Protocolos de validação para novos cultivares",
];

const FORUM_AUTHORS: [&str; 5] = [
    "Dr. Silva",
    "Dra. Santos",
    "Prof. Oliveira",
    "Dr. Costa",
    "Dra. Lima",
];

const TRAINING_ALGORITHMS: [&str; 4] = ["Neural Network", "Random Forest", "SVM", "Gradient Boost"];

/// Uniform decimal in `[min, max]` rounded to the given number of decimals.
fn decimal_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (rng.gen_range(min..=max) * factor).round() / factor
}

/// A date up to `within_days` days before today.
fn recent_date<R: Rng + ?Sized>(rng: &mut R, within_days: i64) -> NaiveDate {
    Local::now().date_naive() - Duration::days(rng.gen_range(0..=within_days))
}

/// Between `min` and `max` distinct elements sampled from `pool`.
fn pick_distinct<R, T>(rng: &mut R, pool: &[T], min: usize, max: usize) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Copy,
{
    let count = rng.gen_range(min..=max);
    pool.choose_multiple(rng, count).copied().collect()
}

/// Uniform pick from a slice of copyable values.
///
/// Callers pass the fixed `ALL` vocabularies, which are never empty.
fn pick<R, T>(rng: &mut R, pool: &[T]) -> T
where
    R: Rng + ?Sized,
    T: Copy,
{
    pool[rng.gen_range(0..pool.len())]
}

/// Generate the eight-species catalog, ids 1..=8 in archetype order.
pub fn generate_species<R: Rng + ?Sized>(rng: &mut R) -> Vec<Species> {
    PLANT_ARCHETYPES
        .iter()
        .enumerate()
        .map(|(index, plant)| Species {
            id: index as u32 + 1,
            name: plant.name.to_string(),
            scientific_name: plant.scientific.to_string(),
            family: plant.family.to_string(),
            icon: plant.icon.to_string(),
            climate: pick(rng, &Climate::ALL),
            cultivation_days: rng.gen_range(30..=180),
            productivity: decimal_in_range(rng, 1.2, 8.5, 1),
            resistances: pick_distinct(rng, &Resistance::ALL, 1, 3),
            nutritional_value: decimal_in_range(rng, 2.0, 9.5, 1),
            added_date: recent_date(rng, 365),
            status: pick(rng, &SpeciesStatus::ALL),
        })
        .collect()
}

/// Generate [`CROSSING_COUNT`] crossings over the given species.
///
/// Parent 2 is drawn uniformly from the catalog excluding parent 1, so the
/// parents of a crossing are always distinct. Fewer than two species is a
/// programming error, guaranteed impossible by the fixed seed list.
pub fn generate_crossings<R: Rng + ?Sized>(rng: &mut R, species: &[Species]) -> Vec<Crossing> {
    assert!(
        species.len() >= 2,
        "crossing generation requires at least two species"
    );
    (0..CROSSING_COUNT)
        .map(|index| {
            let first = rng.gen_range(0..species.len());
            // Sample from the remaining indices, then shift past the first
            // parent to keep the draw uniform over the others.
            let mut second = rng.gen_range(0..species.len() - 1);
            if second >= first {
                second += 1;
            }
            Crossing {
                id: index as u32 + 1,
                parent1_id: species[first].id,
                parent2_id: species[second].id,
                crossing_date: recent_date(rng, 180),
                status: pick(rng, &CrossingStatus::ALL),
                success_rate: decimal_in_range(rng, 0.30, 0.95, 2),
                predicted_traits: pick_distinct(rng, &PredictedTrait::ALL, 2, 4),
                ai_confidence: decimal_in_range(rng, 0.65, 0.98, 2),
            }
        })
        .collect()
}

/// The three seeded predictive models.
///
/// Names, algorithms, accuracies, sample counts and statuses are fixed
/// contract values; only the last-update dates are randomized.
pub fn generate_ai_models<R: Rng + ?Sized>(rng: &mut R) -> Vec<AiModel> {
    vec![
        AiModel {
            id: 1,
            name: "GenePlant Neural Network".to_string(),
            algorithm: "Rede Neural Profunda".to_string(),
            accuracy: 0.94,
            trained_samples: 15_420,
            last_update: recent_date(rng, 7),
            status: ModelStatus::Active,
        },
        AiModel {
            id: 2,
            name: "CrossPredict AI".to_string(),
            algorithm: "Floresta Aleatória".to_string(),
            accuracy: 0.89,
            trained_samples: 8_750,
            last_update: recent_date(rng, 3),
            status: ModelStatus::Training,
        },
        AiModel {
            id: 3,
            name: "TraitOptimizer".to_string(),
            algorithm: "SVM Avançado".to_string(),
            accuracy: 0.91,
            trained_samples: 12_300,
            last_update: recent_date(rng, 14),
            status: ModelStatus::Active,
        },
    ]
}

/// The three seeded notifications. Messages and severities are fixed
/// contract values; only the timestamps are randomized.
pub fn generate_notifications<R: Rng + ?Sized>(rng: &mut R) -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            message: "Novo cruzamento entre Tomate e Batata concluído com 89% de sucesso"
                .to_string(),
            severity: Severity::Success,
            timestamp: recent_date(rng, 1),
        },
        Notification {
            id: 2,
            message: "Modelo GenePlant Neural Network atualizado com novos dados".to_string(),
            severity: Severity::Info,
            timestamp: recent_date(rng, 2),
        },
        Notification {
            id: 3,
            message: "Análise de biossegurança requerida para cruzamento #CR-0847".to_string(),
            severity: Severity::Warning,
            timestamp: recent_date(rng, 1),
        },
    ]
}

/// Training history rows, labeled "Modelo A" through "Modelo H".
fn generate_training_runs<R: Rng + ?Sized>(rng: &mut R) -> Vec<TrainingRun> {
    (0..TRAINING_RUN_COUNT)
        .map(|index| TrainingRun {
            label: format!("Modelo {}", (b'A' + index as u8) as char),
            algorithm: pick(rng, &TRAINING_ALGORITHMS).to_string(),
            started: recent_date(rng, 30),
            duration_hours: rng.gen_range(2..=48),
            final_accuracy: decimal_in_range(rng, 0.75, 0.98, 2),
            status: pick(rng, &TrainingStatus::ALL),
        })
        .collect()
}

fn generate_forum_topics<R: Rng + ?Sized>(rng: &mut R) -> Vec<ForumTopic> {
    FORUM_TOPICS
        .iter()
        .map(|title| ForumTopic {
            title: title.to_string(),
            author: pick(rng, &FORUM_AUTHORS).to_string(),
            posted: recent_date(rng, 7),
            comments: rng.gen_range(3..=47),
            views: rng.gen_range(12..=234),
        })
        .collect()
}

/// Compliance reports coded CR-000 through CR-007.
fn generate_compliance_reports<R: Rng + ?Sized>(rng: &mut R) -> Vec<ComplianceReport> {
    (0..COMPLIANCE_REPORT_COUNT)
        .map(|index| ComplianceReport {
            code: format!("CR-{:03}", index),
            review: pick(rng, &ReviewKind::ALL),
            status: pick(rng, &ReviewStatus::ALL),
            date: recent_date(rng, 30),
        })
        .collect()
}

/// The three highlighted community projects, fixed literals.
fn featured_projects() -> Vec<FeaturedProject> {
    vec![
        FeaturedProject {
            title: "Resistência à Seca no Nordeste".to_string(),
            description: "Desenvolvimento de variedades adaptadas ao clima semiárido".to_string(),
            participants: 23,
            progress_percent: 78,
            icon: "🌵".to_string(),
        },
        FeaturedProject {
            title: "Biofortificação Nutricional".to_string(),
            description: "Aumento do valor nutricional em culturas básicas".to_string(),
            participants: 31,
            progress_percent: 45,
            icon: "🥬".to_string(),
        },
        FeaturedProject {
            title: "Culturas Urbanas Sustentáveis".to_string(),
            description: "Adaptação para agricultura urbana e vertical".to_string(),
            participants: 18,
            progress_percent: 92,
            icon: "🏙️".to_string(),
        },
    ]
}

impl Dataset {
    /// Generate every collection the dashboard renders.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let species = generate_species(rng);
        let crossings = generate_crossings(rng, &species);
        Dataset {
            species,
            crossings,
            ai_models: generate_ai_models(rng),
            notifications: generate_notifications(rng),
            training_runs: generate_training_runs(rng),
            forum_topics: generate_forum_topics(rng),
            compliance_reports: generate_compliance_reports(rng),
            featured_projects: featured_projects(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    /// Species ids are 1..=8 in order and every sampled field stays in bounds.
    fn species_fields_stay_in_bounds() {
        let species = generate_species(&mut rng(7));
        assert_eq!(species.len(), 8);
        for (index, s) in species.iter().enumerate() {
            assert_eq!(s.id, index as u32 + 1);
            assert!((30..=180).contains(&s.cultivation_days));
            assert!((1.2..=8.5).contains(&s.productivity));
            assert!((2.0..=9.5).contains(&s.nutritional_value));
            assert!((1..=3).contains(&s.resistances.len()));
            let distinct: HashSet<_> = s.resistances.iter().collect();
            assert_eq!(distinct.len(), s.resistances.len());
        }
    }

    #[test]
    /// The catalog is seeded from the eight fixed archetypes.
    fn species_follow_archetype_order() {
        let species = generate_species(&mut rng(3));
        let names: Vec<_> = species.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Tomate", "Milho", "Feijão", "Trigo", "Soja", "Arroz", "Batata", "Cenoura"
            ]
        );
    }

    #[test]
    /// Exactly twelve crossings, each referencing two distinct catalog ids.
    fn crossings_reference_distinct_parents() {
        let mut rng = rng(11);
        let species = generate_species(&mut rng);
        let crossings = generate_crossings(&mut rng, &species);
        assert_eq!(crossings.len(), CROSSING_COUNT);
        for c in &crossings {
            assert_ne!(c.parent1_id, c.parent2_id);
            assert!((1..=8).contains(&c.parent1_id));
            assert!((1..=8).contains(&c.parent2_id));
            assert!((0.30..=0.95).contains(&c.success_rate));
            assert!((0.65..=0.98).contains(&c.ai_confidence));
            assert!((2..=4).contains(&c.predicted_traits.len()));
        }
    }

    #[test]
    /// Crossing parents always resolve against the species collection.
    fn crossings_keep_referential_integrity() {
        let mut rng = rng(23);
        let dataset = Dataset::generate(&mut rng);
        for c in &dataset.crossings {
            assert!(dataset.species_by_id(c.parent1_id).is_some());
            assert!(dataset.species_by_id(c.parent2_id).is_some());
        }
    }

    #[test]
    /// Parent exclusion holds even for the minimal two-species catalog.
    fn crossings_work_with_two_species() {
        let mut rng = rng(5);
        let species: Vec<_> = generate_species(&mut rng).into_iter().take(2).collect();
        let crossings = generate_crossings(&mut rng, &species);
        for c in &crossings {
            assert_ne!(c.parent1_id, c.parent2_id);
        }
    }

    #[test]
    #[should_panic(expected = "at least two species")]
    fn crossings_panic_on_single_species() {
        let mut rng = rng(5);
        let species: Vec<_> = generate_species(&mut rng).into_iter().take(1).collect();
        let _ = generate_crossings(&mut rng, &species);
    }

    #[test]
    /// Model and notification records carry their fixed contract values.
    fn fixed_records_match_contract() {
        let mut rng = rng(1);
        let models = generate_ai_models(&mut rng);
        assert_eq!(models.len(), 3);
        assert_eq!(models[0].name, "GenePlant Neural Network");
        assert_eq!(models[0].accuracy, 0.94);
        assert_eq!(models[0].trained_samples, 15_420);
        assert_eq!(models[1].name, "CrossPredict AI");
        assert_eq!(models[1].status, ModelStatus::Training);
        assert_eq!(models[2].name, "TraitOptimizer");
        assert_eq!(models[2].algorithm, "SVM Avançado");

        let notifications = generate_notifications(&mut rng);
        assert_eq!(notifications.len(), 3);
        assert_eq!(notifications[0].severity, Severity::Success);
        assert_eq!(notifications[1].severity, Severity::Info);
        assert_eq!(notifications[2].severity, Severity::Warning);
        assert!(notifications[2].message.contains("#CR-0847"));
    }

    #[test]
    /// Supplemental collections keep their fixed sizes and bounds.
    fn supplemental_collections_stay_in_bounds() {
        let dataset = Dataset::generate(&mut rng(99));
        assert_eq!(dataset.training_runs.len(), 8);
        for run in &dataset.training_runs {
            assert!((2..=48).contains(&run.duration_hours));
            assert!((0.75..=0.98).contains(&run.final_accuracy));
        }
        assert_eq!(dataset.forum_topics.len(), 6);
        assert_eq!(dataset.compliance_reports.len(), 8);
        assert_eq!(dataset.compliance_reports[0].code, "CR-000");
        assert_eq!(dataset.compliance_reports[7].code, "CR-007");
        assert_eq!(dataset.featured_projects.len(), 3);
    }

    #[test]
    /// The same seed reproduces the same dataset.
    fn generation_is_deterministic_under_a_seed() {
        let a = Dataset::generate(&mut rng(42));
        let b = Dataset::generate(&mut rng(42));
        assert_eq!(a, b);
    }

    #[test]
    /// Two generated datasets are structurally independent.
    fn generated_datasets_are_independent() {
        let a = Dataset::generate(&mut rng(42));
        let mut b = Dataset::generate(&mut rng(42));
        b.species[0].name = "Mutante".to_string();
        b.crossings.pop();
        assert_eq!(a.species[0].name, "Tomate");
        assert_eq!(a.crossings.len(), CROSSING_COUNT);
    }
}
