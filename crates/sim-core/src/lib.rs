pub mod topology;
pub mod state;
pub mod scheduler;
pub mod assembler;

pub use assembler::GeometryAssembler;
pub use scheduler::StepScheduler;
pub use state::{CellStateBuffer, RandomizeRule, StepRule, ALIVE, DEAD};
pub use topology::GridMesh;
