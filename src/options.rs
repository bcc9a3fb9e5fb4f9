use clap::{ArgAction, Args};

/// Options controlling the priority order
#[derive(Debug, Clone, Default, Args)]
pub struct OrderOptions {
    /// Yield the largest values first (max-heap) instead of the smallest
    #[arg(long,
        action = ArgAction::Set,
        default_value_t = false,
        default_missing_value = "true",
        num_args = 0..=1,)]
    pub descending: bool,
}

/// Options common to all commands
#[derive(Debug, Clone, Default, Args)]
pub struct CommonOptions {
    /// Log progress in more detail
    #[arg(short, long)]
    pub verbose: bool,
}

impl OrderOptions {
    /// The comparator for this order: does `lhs` come out of the heap before `rhs`?
    pub fn comparator(&self) -> fn(&f64, &f64) -> bool {
        if self.descending {
            |lhs, rhs| lhs > rhs
        } else {
            |lhs, rhs| lhs < rhs
        }
    }

    /// The opposite order, used for keeping a bounded set of the best values.
    pub fn reversed(&self) -> OrderOptions {
        OrderOptions {
            descending: !self.descending,
        }
    }
}
