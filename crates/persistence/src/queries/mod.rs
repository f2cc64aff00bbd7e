// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `accounts` - Account lookups and password verification
//! - `employees` - Employee registry reads
//! - `sessions` - Session lookups
//! - `shifts` - Shift ledger reads

pub mod accounts;
pub mod employees;
pub mod sessions;
pub mod shifts;
