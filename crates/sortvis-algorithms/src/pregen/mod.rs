//! Run-to-completion algorithms.
//!
//! Plain recursive/iterative implementations that sort the whole array in
//! one call and return every event. Simple and fully scrubbable, but the
//! timeline costs memory proportional to the number of operations.

mod exchange;
mod heap;
mod hybrid;
mod insertion;
mod merge;
mod network;
mod quicksort;
mod radix;
mod selection;

use sortvis_events::SortEvent;

use crate::error::Result;
use crate::recorder::Recorder;

/// Algorithms available in run-to-completion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    BinaryInsertion,
    Cocktail,
    OddEven,
    Gnome,
    Pancake,
    Shell,
    Comb,
    Cycle,
    QuickSort,
    QuickSortLr,
    MergeSort,
    HeapSort,
    TimSort,
    IntroSort,
    RadixLsd,
    RadixMsd,
    Bitonic,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::BinaryInsertion => "binary_insertion",
            Algorithm::Cocktail => "cocktail",
            Algorithm::OddEven => "odd_even",
            Algorithm::Gnome => "gnome",
            Algorithm::Pancake => "pancake",
            Algorithm::Shell => "shell",
            Algorithm::Comb => "comb",
            Algorithm::Cycle => "cycle",
            Algorithm::QuickSort => "quicksort",
            Algorithm::QuickSortLr => "quicksort_lr",
            Algorithm::MergeSort => "merge",
            Algorithm::HeapSort => "heap",
            Algorithm::TimSort => "tim",
            Algorithm::IntroSort => "intro",
            Algorithm::RadixLsd => "radix_lsd",
            Algorithm::RadixMsd => "radix_msd",
            Algorithm::Bitonic => "bitonic",
        }
    }

    /// All algorithms in display order.
    pub fn all() -> &'static [Algorithm] {
        const ALGORITHMS: [Algorithm; 20] = [
            Algorithm::Bubble,
            Algorithm::Selection,
            Algorithm::Insertion,
            Algorithm::BinaryInsertion,
            Algorithm::Cocktail,
            Algorithm::OddEven,
            Algorithm::Gnome,
            Algorithm::Pancake,
            Algorithm::Shell,
            Algorithm::Comb,
            Algorithm::Cycle,
            Algorithm::QuickSort,
            Algorithm::QuickSortLr,
            Algorithm::MergeSort,
            Algorithm::HeapSort,
            Algorithm::TimSort,
            Algorithm::IntroSort,
            Algorithm::RadixLsd,
            Algorithm::RadixMsd,
            Algorithm::Bitonic,
        ];
        &ALGORITHMS
    }

    /// Parse an algorithm name, accepting the usual spellings.
    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name.trim().to_lowercase().as_str() {
            "bubble" | "bubblesort" | "bubble_sort" => Some(Algorithm::Bubble),
            "selection" | "selectionsort" | "selection_sort" => Some(Algorithm::Selection),
            "insertion" | "insertionsort" | "insertion_sort" => Some(Algorithm::Insertion),
            "binary_insertion" | "binaryinsertion" | "binary_insertion_sort" => {
                Some(Algorithm::BinaryInsertion)
            }
            "cocktail" | "cocktailsort" | "cocktail_sort" => Some(Algorithm::Cocktail),
            "odd_even" | "oddeven" | "odd_even_sort" => Some(Algorithm::OddEven),
            "gnome" | "gnomesort" | "gnome_sort" => Some(Algorithm::Gnome),
            "pancake" | "pancakesort" | "pancake_sort" => Some(Algorithm::Pancake),
            "shell" | "shellsort" | "shell_sort" => Some(Algorithm::Shell),
            "comb" | "combsort" | "comb_sort" => Some(Algorithm::Comb),
            "cycle" | "cyclesort" | "cycle_sort" => Some(Algorithm::Cycle),
            "quick" | "quicksort" | "quick_sort" => Some(Algorithm::QuickSort),
            "quicksort_lr" | "quick_lr" | "quicksortlr" => Some(Algorithm::QuickSortLr),
            "merge" | "mergesort" | "merge_sort" => Some(Algorithm::MergeSort),
            "heap" | "heapsort" | "heap_sort" => Some(Algorithm::HeapSort),
            "tim" | "timsort" | "tim_sort" => Some(Algorithm::TimSort),
            "intro" | "introsort" | "intro_sort" => Some(Algorithm::IntroSort),
            "radix_lsd" | "radixlsd" | "radix_lsd_sort" => Some(Algorithm::RadixLsd),
            "radix_msd" | "radixmsd" | "radix_msd_sort" => Some(Algorithm::RadixMsd),
            "bitonic" | "bitonicsort" | "bitonic_sort" => Some(Algorithm::Bitonic),
            _ => None,
        }
    }
}

/// Sort `array` in place with `algorithm` and return the full event sequence.
pub fn run(algorithm: Algorithm, array: &mut [i32]) -> Result<Vec<SortEvent>> {
    if matches!(algorithm, Algorithm::RadixLsd | Algorithm::RadixMsd) {
        radix::validate(algorithm.as_str(), array)?;
    }

    let mut rec = Recorder::new(array);
    match algorithm {
        Algorithm::Bubble => exchange::bubble(&mut rec),
        Algorithm::Selection => selection::selection(&mut rec),
        Algorithm::Insertion => insertion::insertion(&mut rec),
        Algorithm::BinaryInsertion => insertion::binary_insertion(&mut rec),
        Algorithm::Cocktail => exchange::cocktail(&mut rec),
        Algorithm::OddEven => exchange::odd_even(&mut rec),
        Algorithm::Gnome => exchange::gnome(&mut rec),
        Algorithm::Pancake => selection::pancake(&mut rec),
        Algorithm::Shell => insertion::shell(&mut rec),
        Algorithm::Comb => exchange::comb(&mut rec),
        Algorithm::Cycle => selection::cycle(&mut rec),
        Algorithm::QuickSort => quicksort::quicksort(&mut rec),
        Algorithm::QuickSortLr => quicksort::quicksort_lr(&mut rec),
        Algorithm::MergeSort => merge::merge_sort(&mut rec),
        Algorithm::HeapSort => heap::heap_sort(&mut rec),
        Algorithm::TimSort => hybrid::tim_sort(&mut rec),
        Algorithm::IntroSort => hybrid::intro_sort(&mut rec),
        Algorithm::RadixLsd => radix::radix_lsd(&mut rec),
        Algorithm::RadixMsd => radix::radix_msd(&mut rec),
        Algorithm::Bitonic => network::bitonic(&mut rec),
    }
    Ok(rec.finish())
}
