//! Browser-side network services.

pub mod api;
