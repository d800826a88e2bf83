//! Parsers generated by `build.rs`, compiled as ordinary Rust.
//!
//! Modules ending in `_measured` start with `Measured <- value:Start rest:.*`
//! and return `[value, rest]`, so `rest` shows where the start rule stopped.
//! Parsers built with an embedded runtime carry their own private `Value`;
//! the others use `peglet_runtime`'s.

pub mod digits {
    include!(concat!(env!("OUT_DIR"), "/digits.rs"));
}

pub mod digits_measured {
    include!(concat!(env!("OUT_DIR"), "/digits_measured.rs"));
}

pub mod opt_measured {
    include!(concat!(env!("OUT_DIR"), "/opt_measured.rs"));
}

pub mod look_measured {
    include!(concat!(env!("OUT_DIR"), "/look_measured.rs"));
}

pub mod and_group_measured {
    include!(concat!(env!("OUT_DIR"), "/and_group_measured.rs"));
}

pub mod not_group_measured {
    include!(concat!(env!("OUT_DIR"), "/not_group_measured.rs"));
}

pub mod choice_measured {
    include!(concat!(env!("OUT_DIR"), "/choice_measured.rs"));
}

pub mod atomic_measured {
    include!(concat!(env!("OUT_DIR"), "/atomic_measured.rs"));
}

pub mod repeat_measured {
    include!(concat!(env!("OUT_DIR"), "/repeat_measured.rs"));
}

pub mod zero_width_measured {
    include!(concat!(env!("OUT_DIR"), "/zero_width_measured.rs"));
}

pub mod terminals_measured {
    include!(concat!(env!("OUT_DIR"), "/terminals_measured.rs"));
}

pub mod parens_measured {
    include!(concat!(env!("OUT_DIR"), "/parens_measured.rs"));
}

pub mod pairs {
    include!(concat!(env!("OUT_DIR"), "/pairs.rs"));
}

pub mod sum {
    include!(concat!(env!("OUT_DIR"), "/sum.rs"));
}

pub mod length {
    include!(concat!(env!("OUT_DIR"), "/length.rs"));
}
