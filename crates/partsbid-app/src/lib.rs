// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod forms;
pub mod history;
pub mod ids;
pub mod model;
pub mod navigator;
pub mod overlay;
pub mod payload;
pub mod selector;
pub mod state;

pub use forms::*;
pub use history::*;
pub use ids::*;
pub use model::*;
pub use navigator::*;
pub use overlay::*;
pub use payload::*;
pub use selector::*;
pub use state::*;
