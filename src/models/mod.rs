pub mod college;
pub mod incident;
pub mod org_member;
pub mod organization;
pub mod program;
pub mod student;

pub use college::College;
pub use incident::{Incident, Location};
pub use org_member::{OrgMember, OrgMemberRow};
pub use organization::Organization;
pub use program::Program;
pub use student::Student;
