//! Calendar layout and block merging for a shared course-scheduling
//! client.
//!
//! Every person's weekly events are projected into per-day blocks,
//! identical sections taken by several people collapse into one block
//! with a color stripe per person, and whatever still overlaps in time
//! is assigned side-by-side columns. The whole pipeline is pure: same
//! schedules in, same layout out, every time.
//!
//! ```
//! use weekgrid::model::{Day, EventInfo, OwnerColor, PersonSchedule, TimeSlot};
//!
//! let lecture = EventInfo {
//!     event_id: "ev-101".into(),
//!     course_name: "6.0001".into(),
//!     section_type: "Lecture".into(),
//!     times: TimeSlot {
//!         days: vec![Day::Mon, Day::Wed],
//!         start_time: "10:00".into(),
//!         end_time: "11:00".into(),
//!     },
//!     owner_preference: None,
//! };
//!
//! let week = weekgrid::compute_week_layout(&[PersonSchedule {
//!     events: vec![lecture],
//!     color: OwnerColor::Green,
//! }]);
//!
//! assert_eq!(week[&Day::Mon].len(), 1);
//! assert_eq!(week[&Day::Mon][0].total_columns, 1);
//! ```

pub mod cache;
pub mod engine;
pub mod model;
pub mod observability;
pub mod wire;

pub use engine::compute_week_layout;
