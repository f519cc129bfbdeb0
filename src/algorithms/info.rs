//! Complexity tables and pseudocode for the supported algorithms

use serde::Serialize;

use super::Algorithm;

/// Static description of an algorithm, shown next to the visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub algorithm: Algorithm,
    pub best_case: &'static str,
    pub average_case: &'static str,
    pub worst_case: &'static str,
    pub space: &'static str,
    /// Whether equal elements keep their relative order
    pub stable: bool,
    pub pseudocode: &'static str,
}

impl AlgorithmInfo {
    /// Look up the description for `algorithm`
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        let (best_case, average_case, worst_case, space, stable, pseudocode) = match algorithm {
            Algorithm::Bubble => ("O(n)", "O(n^2)", "O(n^2)", "O(1)", true, BUBBLE),
            Algorithm::Insertion => ("O(n)", "O(n^2)", "O(n^2)", "O(1)", true, INSERTION),
            Algorithm::Selection => ("O(n^2)", "O(n^2)", "O(n^2)", "O(1)", false, SELECTION),
            Algorithm::Merge => (
                "O(n log n)",
                "O(n log n)",
                "O(n log n)",
                "O(n)",
                true,
                MERGE,
            ),
            Algorithm::Quick => (
                "O(n log n)",
                "O(n log n)",
                "O(n^2)",
                "O(log n)",
                false,
                QUICK,
            ),
            // Right-to-left placement keeps equal values in input order
            Algorithm::Count => ("O(n + k)", "O(n + k)", "O(n + k)", "O(n + k)", true, COUNT),
        };

        Self {
            algorithm,
            best_case,
            average_case,
            worst_case,
            space,
            stable,
            pseudocode,
        }
    }
}

const BUBBLE: &str = "\
for i = 0 to n - 2
    swapped = false
    for j = 0 to n - 2 - i
        if a[j] > a[j + 1]
            swap(a[j], a[j + 1])
            swapped = true
    if not swapped
        break";

const INSERTION: &str = "\
for i = 1 to n - 1
    key = a[i]
    j = i - 1
    while j >= 0 and a[j] > key
        a[j + 1] = a[j]
        j = j - 1
    a[j + 1] = key";

const SELECTION: &str = "\
for i = 0 to n - 2
    minIndex = i
    for j = i + 1 to n - 1
        if a[j] < a[minIndex]
            minIndex = j
    if minIndex != i
        swap(a[i], a[minIndex])";

const MERGE: &str = "\
mergeSort(a, left, right)
    if left >= right
        return
    mid = floor((left + right) / 2)
    mergeSort(a, left, mid)
    mergeSort(a, mid + 1, right)
    merge(a, left, mid, right)

merge(a, left, mid, right)
    L = a[left..mid], R = a[mid + 1..right]
    while L and R are not empty
        if L[0] <= R[0]
            append L.shift()
        else
            append R.shift()
    append the rest of L, then the rest of R";

const QUICK: &str = "\
quickSort(a, low, high)
    if low < high
        p = partition(a, low, high)
        quickSort(a, low, p - 1)
        quickSort(a, p + 1, high)

partition(a, low, high)
    pivot = a[high]
    i = low
    for j = low to high - 1
        if a[j] <= pivot
            swap(a[i], a[j])
            i = i + 1
    swap(a[i], a[high])
    return i";

const COUNT: &str = "\
countSort(a)
    max = findMax(a)
    count = array of size max + 1, all 0
    for each x in a
        count[x]++
    for i = 1 to max
        count[i] += count[i - 1]
    for i = n - 1 down to 0
        count[a[i]]--
        output[count[a[i]]] = a[i]
    return output";
