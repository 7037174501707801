pub(crate) mod checkbox;
pub(crate) mod modal;
pub(crate) mod pagination;
pub(crate) mod status;
pub(crate) mod toast;
