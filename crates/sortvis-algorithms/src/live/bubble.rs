//! Bubble sort stepper.

use sortvis_events::SortEvent;

use super::StepMachine;

/// One compare (and possibly a swap) per step.
pub struct BubbleMachine {
    pass: usize,
    j: usize,
    swapped: bool,
    finished: bool,
}

impl BubbleMachine {
    pub fn new() -> Self {
        Self {
            pass: 0,
            j: 0,
            swapped: false,
            finished: false,
        }
    }
}

impl Default for BubbleMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StepMachine for BubbleMachine {
    fn step(&mut self, array: &mut [i32], out: &mut Vec<SortEvent>) -> bool {
        let n = array.len();
        if self.finished || n < 2 || self.pass >= n - 1 {
            return false;
        }

        let j = self.j;
        out.push(SortEvent::Compare { i: j, j: j + 1 });
        if array[j] > array[j + 1] {
            array.swap(j, j + 1);
            out.push(SortEvent::Swap { i: j, j: j + 1 });
            self.swapped = true;
        }

        self.j += 1;
        if self.j >= n - 1 - self.pass {
            if self.swapped {
                self.pass += 1;
                self.j = 0;
                self.swapped = false;
            } else {
                // A pass without swaps means the array is sorted.
                self.finished = true;
            }
        }
        true
    }
}
