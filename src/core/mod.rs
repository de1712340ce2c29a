pub mod chart_type;
pub mod primitives;
pub mod statistics;
pub mod transform;
pub mod types;

pub use chart_type::{ChartType, WireType};
pub use primitives::coerce_numeric;
pub use statistics::{StatisticsSummary, compute_statistics};
pub use transform::{
    Comparator, FilterReport, FilterSpec, Transform, TransformPipeline, WindowEdge,
    filter_aligned,
};
pub use types::{AxisKind, DataPoint, Dataset, PointShape, Series, StyleHints};
