//! Distributed rendering over independent workers.
//!
//! Each worker owns one [`RowRange`] and a private buffer; nothing is shared
//! while tracing. The run has three phases with a barrier between them:
//!
//! 1. every worker traces its rows into its local buffer
//! 2. local maxima go to the root, which reduces them and broadcasts the
//!    global maximum back to every worker
//! 3. every worker tone-maps with that global maximum and sends its 8-bit
//!    rows to the root, which gathers them in rank order
//!
//! Workers run on scoped threads and talk only through channels, the same
//! message pattern a multi-process run would use.

use crate::{
    partition::{partition_rows, RowRange},
    renderer::{render_row, RenderConfig},
    tonemap::{max_channel, tone_map, Bgr},
    Camera, Color, RenderError, RenderResult,
};
use glint_core::Scene;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Barrier;
use std::thread;

/// Channel endpoints and shared state handed to one worker.
struct Worker<'a> {
    range: RowRange,
    scene: &'a Scene,
    camera: Camera,
    config: &'a RenderConfig,
    barrier: &'a Barrier,
    max_tx: Sender<(usize, f32)>,
    global_rx: Receiver<f32>,
    pixel_tx: Sender<(usize, Vec<Bgr>)>,
}

impl Worker<'_> {
    fn run(self) -> RenderResult<()> {
        let rank = self.range.index;
        let width = self.camera.image_width as usize;

        // Phase 1: trace into the private buffer
        let mut local = vec![Color::ZERO; self.range.pixel_count(self.camera.image_width)];
        for (row, y) in local.chunks_mut(width).zip(self.range.rows()) {
            render_row(self.scene, &self.camera, y, row, self.config);
        }
        log::debug!(
            "Worker {} finished rows {}..{}",
            rank,
            self.range.start,
            self.range.end
        );
        self.barrier.wait();

        // Phase 2: global max reduction
        let local_max = max_channel(&local);
        log::debug!("Worker {} max lighting value is {}", rank, local_max);
        self.max_tx
            .send((rank, local_max))
            .map_err(|_| RenderError::Disconnected)?;
        let global_max = self
            .global_rx
            .recv()
            .map_err(|_| RenderError::Disconnected)?;
        self.barrier.wait();

        // Phase 3: tone-map and gather
        self.pixel_tx
            .send((rank, tone_map(&local, global_max)))
            .map_err(|_| RenderError::Disconnected)
    }
}

/// Render with `workers` independent workers, each owning an equal band of rows.
///
/// Fails up front when the image height does not divide evenly.
pub fn render_distributed(
    scene: &Scene,
    config: &RenderConfig,
    workers: usize,
) -> RenderResult<Vec<Bgr>> {
    config.validate()?;
    let ranges = partition_rows(config.height, workers)?;
    let camera = config.camera();
    let barrier = Barrier::new(workers);

    let (max_tx, max_rx) = mpsc::channel();
    let (pixel_tx, pixel_rx) = mpsc::channel();

    log::info!(
        "Distributing {} rows over {} workers ({} rows each)",
        config.height,
        workers,
        ranges[0].row_count()
    );

    thread::scope(|s| {
        let mut global_txs = Vec::with_capacity(workers);
        let mut handles = Vec::with_capacity(workers);

        for range in &ranges {
            let (global_tx, global_rx) = mpsc::channel();
            global_txs.push(global_tx);

            let worker = Worker {
                range: *range,
                scene,
                camera,
                config,
                barrier: &barrier,
                max_tx: max_tx.clone(),
                global_rx,
                pixel_tx: pixel_tx.clone(),
            };
            let handle = thread::Builder::new()
                .name(format!("glint-worker-{}", range.index))
                .spawn_scoped(s, move || worker.run())?;
            handles.push(handle);
        }

        // Only the workers hold senders from here on
        drop(max_tx);
        drop(pixel_tx);

        let gathered = gather(&ranges, &max_rx, &global_txs, &pixel_rx);
        drop(global_txs);

        for (rank, handle) in handles.into_iter().enumerate() {
            handle.join().map_err(|_| RenderError::WorkerFailed(rank))??;
        }

        gathered
    })
}

/// Root side of the reduction, broadcast and gather.
fn gather(
    ranges: &[RowRange],
    max_rx: &Receiver<(usize, f32)>,
    global_txs: &[Sender<f32>],
    pixel_rx: &Receiver<(usize, Vec<Bgr>)>,
) -> RenderResult<Vec<Bgr>> {
    let workers = ranges.len();

    let mut global_max = 0.0f32;
    for _ in 0..workers {
        let (rank, local_max) = max_rx
            .recv()
            .map_err(|_| RenderError::Disconnected)?;
        log::debug!("Process {}'s max lighting value is {}", rank, local_max);
        global_max = global_max.max(local_max);
    }
    log::info!("Global maximum lighting value is {}", global_max);

    for (rank, tx) in global_txs.iter().enumerate() {
        tx.send(global_max)
            .map_err(|_| RenderError::WorkerFailed(rank))?;
    }

    let mut bands: Vec<Option<Vec<Bgr>>> = vec![None; workers];
    for _ in 0..workers {
        let (rank, pixels) = pixel_rx
            .recv()
            .map_err(|_| RenderError::Disconnected)?;
        bands[rank] = Some(pixels);
    }

    let total = bands.iter().flatten().map(Vec::len).sum();
    let mut image = Vec::with_capacity(total);
    for (rank, band) in bands.into_iter().enumerate() {
        image.extend(band.ok_or(RenderError::WorkerFailed(rank))?);
    }

    Ok(image)
}
