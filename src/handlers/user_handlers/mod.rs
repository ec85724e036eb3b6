pub mod actions;
pub mod loket;
pub mod trash;

pub use self::actions::{change_role, delete, force_delete, restore, ActionForm, RoleForm};
pub use self::loket::{assign, form as loket_form, AssignForm};
pub use self::trash::list as trashed;
