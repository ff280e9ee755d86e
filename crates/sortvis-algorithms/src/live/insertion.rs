//! Insertion sort stepper (adjacent swaps).

use sortvis_events::SortEvent;

use super::StepMachine;

pub struct InsertionMachine {
    i: usize,
    j: usize,
}

impl InsertionMachine {
    pub fn new() -> Self {
        Self { i: 1, j: 1 }
    }
}

impl Default for InsertionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StepMachine for InsertionMachine {
    fn step(&mut self, array: &mut [i32], out: &mut Vec<SortEvent>) -> bool {
        let n = array.len();
        if self.j == 0 {
            self.i += 1;
            self.j = self.i;
        }
        if self.i >= n {
            return false;
        }

        let j = self.j;
        out.push(SortEvent::Compare { i: j - 1, j });
        if array[j - 1] > array[j] {
            array.swap(j - 1, j);
            out.push(SortEvent::Swap { i: j - 1, j });
            self.j -= 1;
        } else {
            self.i += 1;
            self.j = self.i;
        }
        true
    }
}
