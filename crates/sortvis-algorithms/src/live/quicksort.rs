//! Quicksort stepper (Lomuto partition, explicit range stack).

use sortvis_events::SortEvent;

use super::StepMachine;

/// An in-progress partition of `[lo, hi]` with the pivot at `hi`.
struct Partition {
    lo: usize,
    hi: usize,
    store: usize,
    scan: usize,
}

pub struct QuickSortMachine {
    stack: Vec<(usize, usize)>,
    current: Option<Partition>,
}

impl QuickSortMachine {
    pub fn new(len: usize) -> Self {
        let mut stack = Vec::new();
        if len > 1 {
            stack.push((0, len - 1));
        }
        Self {
            stack,
            current: None,
        }
    }
}

impl StepMachine for QuickSortMachine {
    fn step(&mut self, array: &mut [i32], out: &mut Vec<SortEvent>) -> bool {
        let Some(part) = self.current.as_mut() else {
            return match self.stack.pop() {
                Some((lo, hi)) => {
                    out.push(SortEvent::EnterRange { lo, hi });
                    self.current = Some(Partition {
                        lo,
                        hi,
                        store: lo,
                        scan: lo,
                    });
                    true
                }
                None => false,
            };
        };

        if part.scan < part.hi {
            out.push(SortEvent::Compare { i: part.scan, j: part.hi });
            if array[part.scan] <= array[part.hi] {
                if part.store != part.scan {
                    array.swap(part.store, part.scan);
                    out.push(SortEvent::Swap { i: part.store, j: part.scan });
                }
                part.store += 1;
            }
            part.scan += 1;
            return true;
        }

        let (lo, hi, pivot) = (part.lo, part.hi, part.store);
        if pivot != hi {
            array.swap(pivot, hi);
            out.push(SortEvent::Swap { i: pivot, j: hi });
        }
        out.push(SortEvent::ExitRange { lo, hi });

        // Right first so the left side is partitioned next.
        if pivot + 1 < hi {
            self.stack.push((pivot + 1, hi));
        }
        if pivot > lo + 1 {
            self.stack.push((lo, pivot - 1));
        }
        self.current = None;
        true
    }
}
