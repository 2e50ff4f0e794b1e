pub mod incident;
pub mod org;
pub mod shape;

pub use incident::MonthBuckets;
pub use org::{CategoryCount, MemberSeries, ProgramSeries, RadarSeries, StudentProgramSeries};
pub use shape::Semester;
