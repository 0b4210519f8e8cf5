//! Domain records for the research catalog.
//!
//! All collections are produced once at startup by the generator and held
//! immutable for the session lifetime. Display strings stay in pt-BR to
//! match the platform's research data; identifiers are English.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Climate category a species is adapted to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum Climate {
    #[strum(serialize = "Tropical")]
    Tropical,
    #[strum(serialize = "Temperado")]
    Temperate,
    #[strum(serialize = "Árido")]
    Arid,
    #[strum(serialize = "Subtropical")]
    Subtropical,
    #[strum(serialize = "Mediterrâneo")]
    Mediterranean,
}

impl Climate {
    pub const ALL: [Climate; 5] = [
        Climate::Tropical,
        Climate::Temperate,
        Climate::Arid,
        Climate::Subtropical,
        Climate::Mediterranean,
    ];
}

/// Resistance trait a species can carry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Resistance {
    #[strum(serialize = "Seca")]
    Drought,
    #[strum(serialize = "Pragas")]
    Pests,
    #[strum(serialize = "Fungos")]
    Fungi,
    #[strum(serialize = "Frio")]
    Cold,
    #[strum(serialize = "Calor")]
    Heat,
    #[strum(serialize = "Salinidade")]
    Salinity,
}

impl Resistance {
    pub const ALL: [Resistance; 6] = [
        Resistance::Drought,
        Resistance::Pests,
        Resistance::Fungi,
        Resistance::Cold,
        Resistance::Heat,
        Resistance::Salinity,
    ];
}

/// Outcome trait predicted for a crossing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, strum::Display)]
pub enum PredictedTrait {
    #[strum(serialize = "Maior produtividade")]
    HigherYield,
    #[strum(serialize = "Resistência a seca")]
    DroughtResistance,
    #[strum(serialize = "Melhores nutrientes")]
    BetterNutrients,
    #[strum(serialize = "Crescimento acelerado")]
    FastGrowth,
    #[strum(serialize = "Resistência a pragas")]
    PestResistance,
    #[strum(serialize = "Adaptação climática")]
    ClimateAdaptation,
}

impl PredictedTrait {
    pub const ALL: [PredictedTrait; 6] = [
        PredictedTrait::HigherYield,
        PredictedTrait::DroughtResistance,
        PredictedTrait::BetterNutrients,
        PredictedTrait::FastGrowth,
        PredictedTrait::PestResistance,
        PredictedTrait::ClimateAdaptation,
    ];
}

/// Lifecycle status of a cataloged species.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum SpeciesStatus {
    #[strum(serialize = "Ativo")]
    Active,
    #[strum(serialize = "Em Teste")]
    Testing,
    #[strum(serialize = "Aprovado")]
    Approved,
}

impl SpeciesStatus {
    pub const ALL: [SpeciesStatus; 3] = [
        SpeciesStatus::Active,
        SpeciesStatus::Testing,
        SpeciesStatus::Approved,
    ];
}

/// Status of a crossing experiment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum CrossingStatus {
    #[strum(serialize = "Em Andamento")]
    InProgress,
    #[strum(serialize = "Concluído")]
    Completed,
    #[strum(serialize = "Análise")]
    UnderReview,
    #[strum(serialize = "Falhou")]
    Failed,
}

impl CrossingStatus {
    pub const ALL: [CrossingStatus; 4] = [
        CrossingStatus::InProgress,
        CrossingStatus::Completed,
        CrossingStatus::UnderReview,
        CrossingStatus::Failed,
    ];
}

/// Status of a predictive model.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum ModelStatus {
    #[strum(serialize = "Ativo")]
    Active,
    #[strum(serialize = "Treinando")]
    Training,
}

/// Severity of a platform notification.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
}

/// Status of a recorded model-training run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum TrainingStatus {
    #[strum(serialize = "Concluído")]
    Completed,
    #[strum(serialize = "Em Andamento")]
    InProgress,
    #[strum(serialize = "Falhado")]
    Failed,
    #[strum(serialize = "Pausado")]
    Paused,
}

impl TrainingStatus {
    pub const ALL: [TrainingStatus; 4] = [
        TrainingStatus::Completed,
        TrainingStatus::InProgress,
        TrainingStatus::Failed,
        TrainingStatus::Paused,
    ];
}

/// Kind of biosafety review a compliance report covers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum ReviewKind {
    #[strum(serialize = "Ambiental")]
    Environmental,
    #[strum(serialize = "Alimentar")]
    FoodSafety,
    #[strum(serialize = "Genética")]
    Genetic,
    #[strum(serialize = "Alergia")]
    Allergy,
}

impl ReviewKind {
    pub const ALL: [ReviewKind; 4] = [
        ReviewKind::Environmental,
        ReviewKind::FoodSafety,
        ReviewKind::Genetic,
        ReviewKind::Allergy,
    ];
}

/// Verdict of a biosafety review.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum ReviewStatus {
    #[strum(serialize = "Aprovado")]
    Approved,
    #[strum(serialize = "Pendente")]
    Pending,
    #[strum(serialize = "Reprovado")]
    Rejected,
    #[strum(serialize = "Em Revisão")]
    UnderReview,
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 4] = [
        ReviewStatus::Approved,
        ReviewStatus::Pending,
        ReviewStatus::Rejected,
        ReviewStatus::UnderReview,
    ];
}

/// A plant taxon with agronomic and genetic metadata.
///
/// Ids are unique within the catalog and assigned in generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: u32,
    pub name: String,
    pub scientific_name: String,
    pub family: String,
    pub icon: String,
    pub climate: Climate,
    /// Cultivation time in days, within [30, 180].
    pub cultivation_days: u16,
    /// Productivity in t/ha, within [1.2, 8.5], one-decimal precision.
    pub productivity: f64,
    /// Between one and three distinct resistance traits.
    pub resistances: Vec<Resistance>,
    /// Nutritional score, within [2.0, 9.5], one-decimal precision.
    pub nutritional_value: f64,
    pub added_date: NaiveDate,
    pub status: SpeciesStatus,
}

/// A breeding pairing between two distinct catalog species.
///
/// Parents are referenced by id; both must resolve against the species
/// collection the crossing was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crossing {
    pub id: u32,
    pub parent1_id: u32,
    pub parent2_id: u32,
    pub crossing_date: NaiveDate,
    pub status: CrossingStatus,
    /// Within [0.30, 0.95], two-decimal precision.
    pub success_rate: f64,
    /// Between two and four distinct predicted traits.
    pub predicted_traits: Vec<PredictedTrait>,
    /// Within [0.65, 0.98], two-decimal precision.
    pub ai_confidence: f64,
}

/// A named predictive model with static accuracy and status metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiModel {
    pub id: u32,
    pub name: String,
    pub algorithm: String,
    pub accuracy: f64,
    pub trained_samples: u64,
    pub last_update: NaiveDate,
    pub status: ModelStatus,
}

/// A platform notification shown in the notifications dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
    pub timestamp: NaiveDate,
}

/// A recorded model-training run shown in the training history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRun {
    pub label: String,
    pub algorithm: String,
    pub started: NaiveDate,
    /// Within [2, 48].
    pub duration_hours: u8,
    /// Within [0.75, 0.98], two-decimal precision.
    pub final_accuracy: f64,
    pub status: TrainingStatus,
}

/// A community discussion topic shown in the collaboration tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumTopic {
    pub title: String,
    pub author: String,
    pub posted: NaiveDate,
    pub comments: u16,
    pub views: u16,
}

/// A biosafety compliance report shown in the safety tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub code: String,
    pub review: ReviewKind,
    pub status: ReviewStatus,
    pub date: NaiveDate,
}

/// A highlighted community project shown in the collaboration tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedProject {
    pub title: String,
    pub description: String,
    pub participants: u16,
    pub progress_percent: u8,
    pub icon: String,
}

/// All collections rendered by the dashboard, generated once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub species: Vec<Species>,
    pub crossings: Vec<Crossing>,
    pub ai_models: Vec<AiModel>,
    pub notifications: Vec<Notification>,
    pub training_runs: Vec<TrainingRun>,
    pub forum_topics: Vec<ForumTopic>,
    pub compliance_reports: Vec<ComplianceReport>,
    pub featured_projects: Vec<FeaturedProject>,
}

impl Dataset {
    /// Look up a species by its catalog id.
    pub fn species_by_id(&self, id: u32) -> Option<&Species> {
        self.species.iter().find(|s| s.id == id)
    }

    /// Number of predictive models currently marked active.
    pub fn active_model_count(&self) -> usize {
        self.ai_models
            .iter()
            .filter(|m| m.status == ModelStatus::Active)
            .count()
    }

    /// Parent pairing label for a crossing, e.g. "Tomate × Batata".
    ///
    /// Unresolvable parent ids render as "?"; generated data never
    /// produces them.
    pub fn crossing_label(&self, crossing: &Crossing) -> String {
        let name = |id| {
            self.species_by_id(id)
                .map(|s| s.name.as_str())
                .unwrap_or("?")
        };
        format!(
            "{} × {}",
            name(crossing.parent1_id),
            name(crossing.parent2_id)
        )
    }

    /// One-line catalog summary for console output.
    pub fn summary(&self) -> String {
        format!(
            "{} espécies, {} cruzamentos, {} modelos de IA, {} notificações",
            self.species.len(),
            self.crossings.len(),
            self.ai_models.len(),
            self.notifications.len()
        )
    }
}
