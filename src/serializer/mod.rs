//! Serialization subsystem
//!
//! Pure, stateless record-to-JSON transformations:
//!
//! 1. Leaf serializers map one record to its declared field mapping
//!    plus its attached notes
//! 2. The registry dispatches any `EntityRef` to its leaf serializer
//! 3. The relationship table declares which child kinds nest under
//!    which parent kinds
//! 4. `ChildSetSerializer` combines the three: parent leaf output plus
//!    filtered, serialized child sets
//!
//! Every transformation is a pure read; serializing the same record
//! twice yields identical output.

mod child_set;
mod errors;
pub mod leaf;
mod registry;
mod relations;
mod views;

pub use child_set::ChildSetSerializer;
pub use errors::{SerializerError, SerializerResult};
pub use registry::{serialize, serialize_many};
pub use relations::{relation, Relation, RELATIONS};
pub use views::{student_grades, student_summary, student_transcript};
