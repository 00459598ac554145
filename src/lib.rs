pub mod accumulator;
pub mod encoding;
pub mod equivalence;
pub mod monoid;

pub use accumulator::{reduce_partitioned, Accumulator, Averager, MonoidAccumulator};
#[cfg(feature = "parallel")]
pub use accumulator::par_reduce;
pub use encoding::{CodecError, Snapshot};
pub use equivalence::{
    multiset_diff, multiset_equal, multiset_equal_by, unique_set_equal, unique_set_equal_by,
    Equivalence, MultisetDiff,
};
pub use monoid::{fingerprint::MultisetFingerprint, Monoid};
