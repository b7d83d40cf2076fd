use std::{future::Future, io};

use tracing::info;

use crate::{Clock, Frame, Renderer, Simulation};

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Population reached zero.
    Extinct { generation: u64 },
    /// The shutdown future completed.
    Interrupted { generation: u64 },
    /// The generation limit was reached.
    Exhausted { generation: u64 },
}

impl RunOutcome {
    pub fn generation(self) -> u64 {
        match self {
            Self::Extinct { generation }
            | Self::Interrupted { generation }
            | Self::Exhausted { generation } => generation,
        }
    }
}

/// Render, tick and wait until the board dies out, `shutdown` completes,
/// or `max_generations` generations have been computed.
///
/// `shutdown` is only observed while waiting between generations.
pub async fn run<R, C, S>(
    sim: &mut Simulation,
    renderer: &mut R,
    clock: &mut C,
    shutdown: S,
    max_generations: Option<u64>,
) -> io::Result<RunOutcome>
where
    R: Renderer,
    C: Clock,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let (width, height) = sim.board().size();
    info!(width, height, population = sim.population(), "simulation started");

    let outcome = loop {
        if sim.is_extinct() {
            break RunOutcome::Extinct {
                generation: sim.generation(),
            };
        }
        if max_generations.is_some_and(|max| sim.generation() >= max) {
            break RunOutcome::Exhausted {
                generation: sim.generation(),
            };
        }

        renderer.render(&Frame {
            generation: sim.generation(),
            board: sim.board(),
        })?;
        sim.tick();

        tokio::select! {
            biased;
            _ = &mut shutdown => break RunOutcome::Interrupted {
                generation: sim.generation(),
            },
            _ = clock.wait_frame() => {}
        }
    };

    info!(?outcome, "simulation stopped");
    Ok(outcome)
}
