// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules.
//!
//! This module contains all state-changing operations for the persistence
//! layer. Every operation that reads state before writing runs inside a
//! single `IMMEDIATE` transaction so the check and the write cannot
//! interleave with another writer.
//!
//! ## Module Organization
//!
//! - `accounts` - Account creation and admin bootstrap
//! - `employees` - Employee registry writes
//! - `sessions` - Session and flash message writes
//! - `shifts` - Shift ledger writes

pub mod accounts;
pub mod employees;
pub mod sessions;
pub mod shifts;
