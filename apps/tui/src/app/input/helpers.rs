//! Index arithmetic for cyclic selections.

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(wrap_decrement(0, 4), 3);
        assert_eq!(wrap_increment(3, 4), 0);
        assert_eq!(wrap_increment(1, 4), 2);
    }

    #[test]
    fn empty_sets_stay_at_zero() {
        assert_eq!(wrap_decrement(0, 0), 0);
        assert_eq!(wrap_increment(5, 0), 0);
    }
}
