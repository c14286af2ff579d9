// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text formats.
//!
//! Currently this is the command script language used by the CLI.

pub mod script;

pub use script::{apply_command, parse_script, Command, CommandOutcome, ScriptLine, ScriptParseError};
