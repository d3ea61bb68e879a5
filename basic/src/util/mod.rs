// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod documentation_provider;
mod source_range;

pub use self::{
    documentation_provider::DocumentationProvider,
    source_range::SourceRange,
};
