//! 同步原语
//!
//! 向其它内核模块提供基本的锁和同步原语
//! 包括自旋锁和单持有者的独占访问门

#![no_std]

extern crate alloc;

mod gate;
mod raw_spin_lock;
mod spin_lock;

pub use gate::*;
pub use raw_spin_lock::*;
pub use spin_lock::*;
