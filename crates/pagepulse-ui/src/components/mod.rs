pub(crate) mod toast;
