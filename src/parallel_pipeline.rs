// The detection pipeline is synchronous and run-to-completion, and it shares
// no state between invocations, which makes independent image submissions
// embarrassingly parallel. This module provides that seam: a pool of worker
// tasks, each owning its own `DetectionPipeline`, fed round-robin by a
// dispatcher so an interactive frontend can submit images without blocking on
// the per-image sweep time.

use crate::pipeline::{DetectionError, DetectionPipeline, DetectionReport, PipelineConfig, PixelGrid};
use anyhow::anyhow;
use futures::future::join_all;
use tokio::sync::{mpsc, oneshot};

pub struct DetectionTask {
    pub grid: PixelGrid,
    pub result_sender: oneshot::Sender<Result<DetectionReport, DetectionError>>,
}

pub struct WorkerPool {
    task_sender: mpsc::UnboundedSender<DetectionTask>,
    workers: Vec<tokio::task::JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns one worker per available core. Must be called from within a
    /// tokio runtime.
    pub fn new(config: PipelineConfig) -> Self {
        let worker_count = num_cpus::get().max(1);
        log::debug!("spawning {} detection workers", worker_count);

        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<DetectionTask>();

        // Create a single dispatcher that distributes tasks to workers
        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<DetectionTask>())
            .unzip();

        // Spawn dispatcher
        let dispatcher_senders = worker_senders;
        tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                let _ = dispatcher_senders[worker_idx].send(task);
                worker_idx = (worker_idx + 1) % dispatcher_senders.len();
            }
        });

        // Spawn workers, each owning its own pipeline
        let mut workers = Vec::with_capacity(worker_count);
        for mut worker_receiver in worker_receivers {
            let pipeline = DetectionPipeline::new(config.clone());

            workers.push(tokio::spawn(async move {
                while let Some(task) = worker_receiver.recv().await {
                    let result = pipeline.detect(&task.grid);
                    let _ = task.result_sender.send(result);
                }
            }));
        }

        Self {
            task_sender,
            workers,
        }
    }

    pub async fn detect(&self, grid: PixelGrid) -> anyhow::Result<DetectionReport> {
        let (result_sender, result_receiver) = oneshot::channel();

        self.task_sender
            .send(DetectionTask {
                grid,
                result_sender,
            })
            .map_err(|_| anyhow!("failed to send task to worker pool"))?;

        let result = result_receiver
            .await
            .map_err(|_| anyhow!("failed to receive result from worker"))?;
        Ok(result?)
    }

    /// Stops all workers. In-flight detections are abandoned.
    pub fn shutdown(&self) {
        for worker in &self.workers {
            worker.abort();
        }
    }
}

pub struct ParallelPipeline {
    worker_pool: WorkerPool,
}

impl ParallelPipeline {
    /// Must be called from within a tokio runtime.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            worker_pool: WorkerPool::new(config),
        }
    }

    /// Submits one image and awaits its report.
    pub async fn detect(&self, grid: PixelGrid) -> anyhow::Result<DetectionReport> {
        self.worker_pool.detect(grid).await
    }

    /// Submits a batch of independent images and awaits all reports, in the
    /// submission order.
    pub async fn detect_all(&self, grids: Vec<PixelGrid>) -> Vec<anyhow::Result<DetectionReport>> {
        join_all(grids.into_iter().map(|grid| self.worker_pool.detect(grid))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel::pixel::Pixel;

    fn striped_grid(stripe_start: u32) -> PixelGrid {
        let mut grid = PixelGrid::filled(20, 50, Pixel::new(0, 0, 0, 255));
        for y in stripe_start..stripe_start + 6 {
            for x in 0..20 {
                grid.set(x, y, Pixel::new(255, 255, 255, 255));
            }
        }
        grid
    }

    #[tokio::test]
    async fn batch_matches_the_synchronous_pipeline() {
        let config = PipelineConfig::default();
        let parallel = ParallelPipeline::new(config.clone());
        let synchronous = DetectionPipeline::new(config);

        let grids = vec![striped_grid(10), striped_grid(30), striped_grid(20)];
        let reports = parallel.detect_all(grids.clone()).await;

        assert_eq!(reports.len(), grids.len());
        for (report, grid) in reports.iter().zip(&grids) {
            let report = report.as_ref().expect("worker should return a report");
            let expected = synchronous.detect(grid).unwrap();
            assert_eq!(report.candidates.len(), expected.candidates.len());
            for (got, want) in report.candidates.iter().zip(&expected.candidates) {
                assert_eq!(got.band, want.band);
            }
        }
    }

    #[tokio::test]
    async fn invalid_grids_still_fail_fast_through_the_pool() {
        let parallel = ParallelPipeline::new(PipelineConfig::default());
        let tiny = PixelGrid::filled(20, 5, Pixel::gray(0));

        let result = parallel.detect(tiny).await;
        assert!(result.is_err());
    }
}
