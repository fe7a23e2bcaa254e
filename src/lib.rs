pub mod seq_list;

pub use seq_list::{List, ListError};

static SOME_ELEMS: i32 = 10;
static MANY_ELEMS: i32 = 100_000;

/// Fills a list from the back, then drains it from the front.
pub fn churn_test() -> Result<(), ListError> {
    let mut list = List::new();

    for elem in 0..MANY_ELEMS {
        list.push_back(elem)?;
    }

    while list.pop_front().is_some() {}

    Ok(())
}

/// Alternates insertion between both ends, then drains from the front.
pub fn mixed_churn_test() -> Result<(), ListError> {
    let mut list = List::new();

    for elem in 0..MANY_ELEMS {
        if elem % 2 == 0 {
            list.push_back(elem)?;
        } else {
            list.push_front(elem)?;
        }
    }

    while list.pop_front().is_some() {}

    Ok(())
}

pub mod seq {
    use super::*;

    #[test]
    fn push() {
        let mut list = List::new();

        // Push `SOME_ELEMS` elements
        for elem in 0..SOME_ELEMS {
            list.push_back(elem).unwrap();
        }

        assert_eq!(list.len(), SOME_ELEMS as usize);
    }

    #[test]
    fn stress_push() {
        let mut list = List::new();

        // Push `MANY_ELEMS` elements
        for elem in 0..MANY_ELEMS {
            list.push_back(elem).unwrap();
        }

        assert_eq!(list.len(), MANY_ELEMS as usize);
    }

    #[test]
    fn flush() {
        let mut list = List::new();

        // Push `SOME_ELEMS` elements
        for elem in 0..SOME_ELEMS {
            list.push_back(elem).unwrap();
        }

        // Pop `SOME_ELEMS` elements
        for _ in 0..SOME_ELEMS {
            list.pop_front();
        }

        assert!(list.is_empty());
    }

    #[test]
    fn stress_flush() {
        let mut list = List::new();

        // Push `MANY_ELEMS` elements
        for elem in 0..MANY_ELEMS {
            list.push_back(elem).unwrap();
        }

        // Pop `MANY_ELEMS` elements
        for _ in 0..MANY_ELEMS {
            list.pop_front();
        }

        assert!(list.is_empty());
    }

    #[test]
    fn checked_flush() {
        let mut list = List::new();

        // Push `SOME_ELEMS` elements
        for elem in 0..SOME_ELEMS {
            list.push_back(elem).unwrap();
        }

        // Pop `SOME_ELEMS` elements in insertion order
        for elem in 0..SOME_ELEMS {
            assert_eq!(list.pop_front(), Some(elem));
        }

        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn stress_checked_flush() {
        let mut list = List::new();

        // Push `MANY_ELEMS` elements
        for elem in 0..MANY_ELEMS {
            list.push_back(elem).unwrap();
        }

        // Pop `MANY_ELEMS` elements in insertion order
        for elem in 0..MANY_ELEMS {
            assert_eq!(list.pop_front(), Some(elem));
        }

        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn varried_flush() {
        let mut list = List::new();

        for elem in 0..SOME_ELEMS {
            list.push_back(elem).unwrap();
        }

        // Drain from both ends, meeting in the middle
        let mut lo = 0;
        let mut hi = SOME_ELEMS - 1;
        while lo <= hi {
            assert_eq!(list.pop_front(), Some(lo));
            lo += 1;
            if lo > hi {
                break;
            }
            assert_eq!(list.pop_back(), Some(hi));
            hi -= 1;
        }

        assert!(list.is_empty());
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn stress_varried_flush() {
        mixed_churn_test().unwrap();
    }

    #[test]
    #[should_panic]
    fn over_reach() {
        let list: List<i32> = List::new();

        list.front().unwrap();
    }
}
