//! Request-level orchestration.

use crate::aggregate::aggregate;
use crate::deadline::DeadlineBudget;
use crate::executor::{PipelineExecutor, UnitContext};
use crate::expand::expand_units;
use crate::lora::{DEFAULT_LORA_PROMPT, LoraExecutor};
use crate::outcome::UnitOutcome;
use crate::recorder::SessionRecorder;
use crate::seed::SeedAllocator;
use lookbook_core::{
    BatchRequest, BatchResult, BatchSummary, GarmentCategory, GeneratedImage, GenerationRequest,
    GenerationSettings, GenerationUnit, ImageRef, LoraGenerationRequest, LoraModel, Pose,
};
use lookbook_error::{GenerationError, GenerationErrorKind};
use lookbook_interface::{LoraModelRepository, ProviderRegistry};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Response of a single-garment generation.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// Successful images in unit expansion order.
    pub images: Vec<GeneratedImage>,
    /// One warning per failed unit.
    pub warnings: Vec<String>,
    /// Session id when persistence succeeded.
    pub session_id: Option<Uuid>,
}

/// Response of a batch generation.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// Per-garment results in request order.
    pub results: Vec<BatchResult>,
    /// Aggregate counts over the batch.
    pub summary: BatchSummary,
    /// Session id when persistence succeeded.
    pub session_id: Option<Uuid>,
}

enum BatchMode {
    TwoStage(PipelineExecutor),
    Lora {
        executor: LoraExecutor,
        model: LoraModel,
        prompt: String,
    },
}

/// Entry point tying expansion, execution, aggregation and persistence
/// together for the three generation operations.
pub struct GenerationService {
    registry: Arc<ProviderRegistry>,
    lora_models: Arc<dyn LoraModelRepository>,
    recorder: SessionRecorder,
    budget: Option<Duration>,
}

impl GenerationService {
    /// Build a service over a provider registry, model repository and
    /// session recorder, with no deadline budget.
    pub fn new(
        registry: Arc<ProviderRegistry>,
        lora_models: Arc<dyn LoraModelRepository>,
        recorder: SessionRecorder,
    ) -> Self {
        Self {
            registry,
            lora_models,
            recorder,
            budget: None,
        }
    }

    /// Apply a soft per-request deadline budget.
    pub fn with_budget(mut self, budget: Option<Duration>) -> Self {
        self.budget = budget;
        self
    }

    /// The registry this service resolves providers from.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Run the two-stage pipeline for a single garment.
    ///
    /// Units run sequentially in expansion order; failed units become
    /// warnings and only a fully failed request is an error.
    ///
    /// # Errors
    ///
    /// Validation, provider resolution and availability errors fail fast
    /// before any unit runs; `GenerationFailed` when zero units succeed.
    #[instrument(skip(self, request), fields(poses = request.poses.len()))]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutput, GenerationError> {
        let seeds = SeedAllocator::new(request.settings.seed);
        let units = expand_units(&request.poses, request.settings.shots_per_pose, 1, &seeds)?;

        let image_gen = self
            .registry
            .image_generation(&request.providers.image_generation)?;
        let try_on = self.registry.try_on(&request.providers.try_on)?;
        let executor = PipelineExecutor::probe(image_gen, try_on).await?;

        let ctx = UnitContext {
            garment_image: &request.garment_image,
            garment_category: request.garment_category.unwrap_or_default(),
            style_reference_images: &request.style_reference_images,
            settings: &request.settings,
        };
        let outcomes = self.run_units(&executor, &units, &ctx).await;
        let output = aggregate(outcomes)?;

        info!(
            images = output.images.len(),
            warnings = output.warnings.len(),
            "Generation complete"
        );
        let session_id = self
            .recorder
            .record(
                vec![request.garment_image.clone()],
                &request.settings,
                &request.providers,
                None,
                &output.images,
            )
            .await;
        Ok(GenerationOutput {
            images: output.images,
            warnings: output.warnings,
            session_id,
        })
    }

    /// Run a batch of garments sequentially, isolating failures per
    /// garment.
    ///
    /// One session covers the whole batch; a garment whose units all fail
    /// contributes an error entry and an empty image list without aborting
    /// its siblings.
    ///
    /// # Errors
    ///
    /// Shape validation (including the garment cap), provider resolution
    /// and LoRA model readiness fail the whole batch before any provider
    /// call.
    #[instrument(skip(self, request), fields(garments = request.garment_images.len()))]
    pub async fn batch_generate(
        &self,
        request: &BatchRequest,
    ) -> Result<BatchOutput, GenerationError> {
        let seeds = SeedAllocator::new(request.settings.seed);
        let units = expand_units(
            &request.poses,
            request.settings.shots_per_pose,
            request.garment_images.len(),
            &seeds,
        )?;

        let mode = match &request.lora_model_id {
            Some(model_id) => {
                let executor =
                    LoraExecutor::new(self.registry.lora()?, self.lora_models.clone());
                let model = executor.resolve_model(model_id).await?;
                executor.probe().await?;
                BatchMode::Lora {
                    executor,
                    model,
                    prompt: DEFAULT_LORA_PROMPT.to_string(),
                }
            }
            None => {
                let image_gen = self
                    .registry
                    .image_generation(&request.providers.image_generation)?;
                let try_on = self.registry.try_on(&request.providers.try_on)?;
                BatchMode::TwoStage(PipelineExecutor::probe(image_gen, try_on).await?)
            }
        };

        let budget = DeadlineBudget::new(self.budget);
        let mut results = Vec::with_capacity(request.garment_images.len());
        for (garment_index, garment_image) in request.garment_images.iter().enumerate() {
            if budget.should_stop() {
                warn!(
                    garment_index,
                    "Deadline approaching, skipping remaining garments"
                );
                results.push(BatchResult {
                    garment_index,
                    garment_thumbnail: garment_image.thumbnail(),
                    generated_images: Vec::new(),
                    error: Some("deadline exceeded before this garment was scheduled".to_string()),
                });
                continue;
            }

            let garment_units: Vec<&GenerationUnit> = units
                .iter()
                .filter(|u| u.garment_index == garment_index)
                .collect();
            let outcome = self
                .run_garment(&mode, &garment_units, garment_image, request, &budget)
                .await;
            match outcome {
                Ok(images) => results.push(BatchResult {
                    garment_index,
                    garment_thumbnail: garment_image.thumbnail(),
                    generated_images: images,
                    error: None,
                }),
                Err(err) => {
                    warn!(garment_index, error = %err, "Garment failed");
                    results.push(BatchResult {
                        garment_index,
                        garment_thumbnail: garment_image.thumbnail(),
                        generated_images: Vec::new(),
                        error: Some(err.kind.to_string()),
                    });
                }
            }
        }

        let summary = BatchSummary::from_results(&results);
        info!(
            total_garments = summary.total_garments,
            total_generated = summary.total_generated,
            failed_count = summary.failed_count,
            "Batch complete"
        );

        let all_images: Vec<GeneratedImage> = results
            .iter()
            .flat_map(|r| r.generated_images.iter().cloned())
            .collect();
        let session_id = self
            .recorder
            .record(
                request.garment_images.clone(),
                &request.settings,
                &request.providers,
                request.lora_model_id.clone(),
                &all_images,
            )
            .await;
        Ok(BatchOutput {
            results,
            summary,
            session_id,
        })
    }

    /// Generate a single image through a trained style model.
    ///
    /// # Errors
    ///
    /// `ModelNotReady` when the model is missing or not finished training,
    /// `ProviderUnavailable` when the LoRA backend has no credentials, and
    /// `GenerationFailed` when the backend call fails.
    #[instrument(skip(self, request), fields(model = %request.lora_model_id))]
    pub async fn lora_generate(
        &self,
        request: &LoraGenerationRequest,
    ) -> Result<GeneratedImage, GenerationError> {
        let executor = LoraExecutor::new(self.registry.lora()?, self.lora_models.clone());
        let model = executor.resolve_model(&request.lora_model_id).await?;
        executor.probe().await?;

        let prompt = request
            .prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_LORA_PROMPT);
        let unit = GenerationUnit {
            garment_index: 0,
            pose: request.pose.unwrap_or(Pose::Front),
            shot_index: 0,
            derived_seed: request.seed,
        };
        let settings = GenerationSettings {
            seed: request.seed,
            ..GenerationSettings::default()
        };

        match executor
            .run_unit(&model, prompt, &unit, request.garment_image.as_ref(), &settings)
            .await
        {
            UnitOutcome::Succeeded(image) => Ok(image),
            UnitOutcome::Failed { reason, .. } => Err(GenerationError::new(
                GenerationErrorKind::GenerationFailed(reason),
            )),
        }
    }

    async fn run_units(
        &self,
        executor: &PipelineExecutor,
        units: &[GenerationUnit],
        ctx: &UnitContext<'_>,
    ) -> Vec<UnitOutcome> {
        let budget = DeadlineBudget::new(self.budget);
        let mut outcomes = Vec::with_capacity(units.len());
        for unit in units {
            if budget.should_stop() {
                warn!(
                    completed = outcomes.len(),
                    total = units.len(),
                    "Deadline approaching, stopping after completed units"
                );
                break;
            }
            outcomes.push(executor.run_unit(unit, ctx).await);
        }
        outcomes
    }

    async fn run_garment(
        &self,
        mode: &BatchMode,
        units: &[&GenerationUnit],
        garment_image: &ImageRef,
        request: &BatchRequest,
        budget: &DeadlineBudget,
    ) -> Result<Vec<GeneratedImage>, GenerationError> {
        let mut outcomes = Vec::with_capacity(units.len());
        for unit in units {
            if budget.should_stop() {
                warn!(unit = %unit, "Deadline approaching, stopping mid-garment");
                break;
            }
            let outcome = match mode {
                BatchMode::TwoStage(executor) => {
                    let ctx = UnitContext {
                        garment_image,
                        garment_category: GarmentCategory::default(),
                        style_reference_images: &[],
                        settings: &request.settings,
                    };
                    executor.run_unit(unit, &ctx).await
                }
                BatchMode::Lora {
                    executor,
                    model,
                    prompt,
                } => {
                    executor
                        .run_unit(model, prompt, unit, Some(garment_image), &request.settings)
                        .await
                }
            };
            outcomes.push(outcome);
        }
        Ok(aggregate(outcomes)?.images)
    }
}

impl std::fmt::Debug for GenerationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationService")
            .field("registry", &self.registry)
            .field("budget", &self.budget)
            .finish()
    }
}
