// Date Cracker - Free and Open Source Software Statement
//
// This project, datecrack, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for utility functions in datecrack.
//
// Tree Location:
// - src/utils/mod.rs (utils module entry point)
// - Submodules: format, logging, prompt

pub mod format;
pub mod logging;
pub mod prompt;

// Changelog:
// - v1.1.0 (2025-07-04): Added logging and prompt submodules.
// - v1.0.0 (2025-06-14): Initial utils module with format.
