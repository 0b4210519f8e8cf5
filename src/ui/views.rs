//! Typed view descriptions for each tab.
//!
//! Pure projections of the generated dataset: every function here maps the
//! collections to a displayable shape and nothing mutates state. The
//! rendering components consume these descriptions without ever touching
//! the dataset directly.

use crate::data::model::{
    CrossingStatus, Dataset, ModelStatus, ReviewKind, ReviewStatus, TrainingStatus,
};
use crate::ui::dashboard::utils::format_thousands;
use chrono::NaiveDate;

/// How many crossings the dashboard tab previews.
const RECENT_CROSSING_COUNT: usize = 5;

/// A single aggregate figure with its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub value: String,
    pub label: String,
}

impl StatCard {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        StatCard {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A crossing preview line on the dashboard tab.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossingCard {
    pub pairing: String,
    pub status: CrossingStatus,
    pub success_rate_percent: f64,
    pub confidence_ratio: f64,
}

/// A predictive-model summary shown on the dashboard and training tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCard {
    pub name: String,
    pub algorithm: String,
    pub status: ModelStatus,
    pub accuracy_ratio: f64,
    pub trained_samples: String,
    pub last_update: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: Vec<StatCard>,
    pub recent_crossings: Vec<CrossingCard>,
    pub models: Vec<ModelCard>,
}

fn model_card(model: &crate::data::model::AiModel) -> ModelCard {
    ModelCard {
        name: model.name.clone(),
        algorithm: model.algorithm.clone(),
        status: model.status,
        accuracy_ratio: model.accuracy,
        trained_samples: format_thousands(model.trained_samples),
        last_update: model.last_update,
    }
}

/// Dashboard tab: aggregate counts, the first five crossings, all models.
///
/// The success-rate card is a fixed display figure, not derived from the
/// crossing records.
pub fn dashboard_view(data: &Dataset) -> DashboardView {
    let stats = vec![
        StatCard::new(data.species.len().to_string(), "Espécies Cadastradas"),
        StatCard::new(data.crossings.len().to_string(), "Cruzamentos Ativos"),
        StatCard::new(data.active_model_count().to_string(), "Modelos IA Ativos"),
        StatCard::new("94%", "Taxa de Sucesso"),
    ];
    let recent_crossings = data
        .crossings
        .iter()
        .take(RECENT_CROSSING_COUNT)
        .map(|crossing| CrossingCard {
            pairing: data.crossing_label(crossing),
            status: crossing.status,
            success_rate_percent: crossing.success_rate * 100.0,
            confidence_ratio: crossing.ai_confidence,
        })
        .collect();
    let models = data.ai_models.iter().map(model_card).collect();
    DashboardView {
        stats,
        recent_crossings,
        models,
    }
}

/// A species entry on the database tab.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesCard {
    pub icon: String,
    pub name: String,
    pub scientific_name: String,
    /// Family, climate and status tags, in display order.
    pub tags: Vec<String>,
    pub cultivation: String,
    pub productivity: String,
    pub resistances: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseView {
    pub species: Vec<SpeciesCard>,
}

/// Database tab: the full species listing.
pub fn database_view(data: &Dataset) -> DatabaseView {
    let species = data
        .species
        .iter()
        .map(|s| SpeciesCard {
            icon: s.icon.clone(),
            name: s.name.clone(),
            scientific_name: s.scientific_name.clone(),
            tags: vec![
                s.family.clone(),
                s.climate.to_string(),
                s.status.to_string(),
            ],
            cultivation: format!("{} dias", s.cultivation_days),
            productivity: format!("{:.1} t/ha", s.productivity),
            resistances: s
                .resistances
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();
    DatabaseView { species }
}

/// A training-history table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRow {
    pub label: String,
    pub algorithm: String,
    pub started: NaiveDate,
    pub duration: String,
    pub accuracy: String,
    pub status: TrainingStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingView {
    pub models: Vec<ModelCard>,
    pub history: Vec<TrainingRow>,
}

/// Training tab: active models plus the run history table.
pub fn training_view(data: &Dataset) -> TrainingView {
    let history = data
        .training_runs
        .iter()
        .map(|run| TrainingRow {
            label: run.label.clone(),
            algorithm: run.algorithm.clone(),
            started: run.started,
            duration: format!("{}h", run.duration_hours),
            accuracy: format!("{:.1}%", run.final_accuracy * 100.0),
            status: run.status,
        })
        .collect();
    TrainingView {
        models: data.ai_models.iter().map(model_card).collect(),
        history,
    }
}

/// One parent-selector panel on the simulation tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentPanel {
    pub heading: String,
    pub icon: String,
    pub selection: String,
    pub family: String,
    pub productivity: String,
    pub resistances: String,
}

/// The fixed predicted-hybrid panel. None of these figures depend on the
/// selected parents.
#[derive(Debug, Clone, PartialEq)]
pub struct HybridForecast {
    pub title: &'static str,
    pub scientific_name: &'static str,
    pub success_rate: &'static str,
    pub productivity: &'static str,
    pub cultivation: &'static str,
    pub nutrition: &'static str,
    pub inherited_resistances: Vec<&'static str>,
    pub confidence_percent: u16,
    pub confidence_note: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactor {
    pub text: &'static str,
    pub warning: bool,
}

/// The fixed biosafety risk panel.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskPanel {
    pub level: &'static str,
    pub level_percent: u16,
    pub factors: Vec<RiskFactor>,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationView {
    pub parent1: ParentPanel,
    pub parent2: ParentPanel,
    pub hybrid: HybridForecast,
    pub risk: RiskPanel,
}

fn parent_panel(data: &Dataset, heading: &str, index: usize) -> ParentPanel {
    let species = &data.species[index % data.species.len()];
    ParentPanel {
        heading: heading.to_string(),
        icon: species.icon.clone(),
        selection: format!("{} ({})", species.name, species.scientific_name),
        family: species.family.clone(),
        productivity: format!("{:.1} t/ha", species.productivity),
        resistances: species
            .resistances
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Simulation tab: the two selector panels plus the fixed result panels.
///
/// The selectors only highlight species details; the forecast and risk
/// panels are display contracts and ignore the selection entirely.
pub fn simulation_view(data: &Dataset, parent1_index: usize, parent2_index: usize) -> SimulationView {
    SimulationView {
        parent1: parent_panel(data, "Parental 1", parent1_index),
        parent2: parent_panel(data, "Parental 2", parent2_index),
        hybrid: HybridForecast {
            title: "Híbrido Previsto",
            scientific_name: "Solanum hybrid sp.",
            success_rate: "87.3%",
            productivity: "5.8 t/ha",
            cultivation: "95 dias",
            nutrition: "7.2/10",
            inherited_resistances: vec!["Seca", "Pragas", "Frio"],
            confidence_percent: 87,
            confidence_note: "87% de confiança baseada em 15.420 amostras de treinamento",
        },
        risk: RiskPanel {
            level: "BAIXO",
            level_percent: 25,
            factors: vec![
                RiskFactor {
                    text: "Compatibilidade genética: Alta",
                    warning: false,
                },
                RiskFactor {
                    text: "Estabilidade genômica: Confirmada",
                    warning: false,
                },
                RiskFactor {
                    text: "Impacto ambiental: Monitoramento necessário",
                    warning: true,
                },
            ],
            recommendations: vec![
                "Teste em ambiente controlado por 3 meses",
                "Monitoramento de polinizadores nativos",
                "Análise de proteínas alergênicas",
                "Avaliação de impacto em culturas adjacentes",
            ],
        },
    }
}

/// The fixed genealogy example on the visualization tab.
#[derive(Debug, Clone, PartialEq)]
pub struct GenealogyView {
    pub parent_a: (&'static str, &'static str),
    pub parent_b: (&'static str, &'static str),
    pub hybrid_note: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationView {
    pub genealogy: GenealogyView,
    /// Success-rate bars per family grouping, in display order.
    pub family_success: Vec<(&'static str, u64)>,
    pub legend: Vec<&'static str>,
}

/// Visualization tab: genealogy example, family chart and the
/// adaptability legend. All figures are fixed display values.
pub fn visualization_view(_data: &Dataset) -> VisualizationView {
    VisualizationView {
        genealogy: GenealogyView {
            parent_a: ("🍅", "Tomate"),
            parent_b: ("🥔", "Batata"),
            hybrid_note: "Híbrido F1 — 87% sucesso previsto",
        },
        family_success: vec![
            ("Solanaceae", 60),
            ("Poaceae", 80),
            ("Fabaceae", 45),
            ("Inter-família", 90),
        ],
        legend: vec![
            "Alta adaptação",
            "Média adaptação",
            "Baixa adaptação",
            "Teste requerido",
        ],
    }
}

/// A forum discussion row on the collaboration tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicRow {
    pub title: String,
    pub author: String,
    pub posted: NaiveDate,
    pub comments: u16,
    pub views: u16,
}

/// A highlighted community project card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub participants: u16,
    pub progress_percent: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollaborationView {
    pub stats: Vec<StatCard>,
    pub topics: Vec<TopicRow>,
    pub projects: Vec<ProjectCard>,
}

/// Collaboration tab: fixed community figures, forum topics and featured
/// projects.
pub fn collaboration_view(data: &Dataset) -> CollaborationView {
    CollaborationView {
        stats: vec![
            StatCard::new("1.247", "Pesquisadores Registrados"),
            StatCard::new("89", "Publicações Recentes"),
            StatCard::new("34", "Projetos Ativos"),
        ],
        topics: data
            .forum_topics
            .iter()
            .map(|topic| TopicRow {
                title: topic.title.clone(),
                author: topic.author.clone(),
                posted: topic.posted,
                comments: topic.comments,
                views: topic.views,
            })
            .collect(),
        projects: data
            .featured_projects
            .iter()
            .map(|project| ProjectCard {
                icon: project.icon.clone(),
                title: project.title.clone(),
                description: project.description.clone(),
                participants: project.participants,
                progress_percent: project.progress_percent,
            })
            .collect(),
    }
}

/// A compliance-report table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub code: String,
    pub review: ReviewKind,
    pub status: ReviewStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SafetyView {
    pub stats: Vec<StatCard>,
    pub reports: Vec<ReportRow>,
}

/// Safety tab: fixed oversight figures plus the compliance table.
pub fn safety_view(data: &Dataset) -> SafetyView {
    SafetyView {
        stats: vec![
            StatCard::new("7", "Cruzamentos em Análise"),
            StatCard::new("23", "Protocolos Vigentes"),
            StatCard::new("2", "Alertas Ativos"),
        ],
        reports: data
            .compliance_reports
            .iter()
            .map(|report| ReportRow {
                code: report.code.clone(),
                review: report.review,
                status: report.status,
                date: report.date,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dataset() -> Dataset {
        Dataset::generate(&mut StdRng::seed_from_u64(42))
    }

    #[test]
    /// The dashboard stats reflect the collection sizes plus the fixed
    /// success-rate figure.
    fn dashboard_stats_reflect_collections() {
        let data = dataset();
        let view = dashboard_view(&data);
        assert_eq!(view.stats.len(), 4);
        assert_eq!(view.stats[0].value, "8");
        assert_eq!(view.stats[1].value, "12");
        assert_eq!(
            view.stats[2].value,
            data.active_model_count().to_string()
        );
        assert_eq!(view.stats[3].value, "94%");
    }

    #[test]
    /// The dashboard previews the first five crossings only.
    fn dashboard_previews_first_five_crossings() {
        let data = dataset();
        let view = dashboard_view(&data);
        assert_eq!(view.recent_crossings.len(), 5);
        assert_eq!(
            view.recent_crossings[0].pairing,
            data.crossing_label(&data.crossings[0])
        );
        assert_eq!(view.models.len(), 3);
    }

    #[test]
    /// The database tab lists every species with its three tags.
    fn database_lists_every_species() {
        let view = database_view(&dataset());
        assert_eq!(view.species.len(), 8);
        for card in &view.species {
            assert_eq!(card.tags.len(), 3);
            assert!(!card.resistances.is_empty());
        }
    }

    #[test]
    /// The hybrid forecast is fixed, whatever parents are selected.
    fn simulation_forecast_ignores_selection() {
        let data = dataset();
        let a = simulation_view(&data, 0, 6);
        let b = simulation_view(&data, 3, 1);
        assert_eq!(a.hybrid, b.hybrid);
        assert_eq!(a.risk, b.risk);
        assert_eq!(a.hybrid.success_rate, "87.3%");
        assert_ne!(a.parent1.selection, b.parent1.selection);
    }

    #[test]
    /// Parent panel indexes wrap instead of panicking.
    fn simulation_parent_indexes_wrap() {
        let data = dataset();
        let view = simulation_view(&data, 8, 17);
        assert_eq!(view.parent1.selection, simulation_view(&data, 0, 0).parent1.selection);
        assert_eq!(view.parent2.selection, simulation_view(&data, 1, 1).parent2.selection);
    }

    #[test]
    /// Training history projects one row per recorded run.
    fn training_history_covers_all_runs() {
        let data = dataset();
        let view = training_view(&data);
        assert_eq!(view.history.len(), data.training_runs.len());
        assert_eq!(view.history[0].label, "Modelo A");
    }

    #[test]
    /// Collaboration and safety figures match the original display values.
    fn community_and_safety_stats_are_fixed() {
        let data = dataset();
        let collaboration = collaboration_view(&data);
        assert_eq!(collaboration.stats[0].value, "1.247");
        assert_eq!(collaboration.topics.len(), 6);
        assert_eq!(collaboration.projects.len(), 3);

        let safety = safety_view(&data);
        assert_eq!(safety.stats.len(), 3);
        assert_eq!(safety.reports.len(), 8);
        assert_eq!(safety.reports[0].code, "CR-000");
    }

    #[test]
    /// The family chart keeps its four fixed bars.
    fn visualization_chart_has_four_bars() {
        let view = visualization_view(&dataset());
        assert_eq!(view.family_success.len(), 4);
        assert_eq!(view.family_success[1], ("Poaceae", 80));
        assert_eq!(view.legend.len(), 4);
    }
}
