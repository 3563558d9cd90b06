// SPDX-License-Identifier: GPL-3.0-only

pub mod photos;

pub use photos::Photos;

pub enum Screen {
    Photos(Photos),
}
