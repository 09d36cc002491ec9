#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use og_reflect as reflect;
pub use og_serial as serial;
pub use og_utils as utils;
