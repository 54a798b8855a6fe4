use crate::endian::Endian;
use crate::{ReverseBytes, reverse_bytes_in_place};
use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSliceMut;

/// Multi threaded version of [`convert_slice`](crate::convert_slice)
///
/// Splits `values` into one chunk per CPU and converts the chunks on the rayon thread pool.
#[inline(never)]
pub fn convert_slice_multi_thread<E: Endian, T: ReverseBytes + Copy + Send>(values: &mut [T]) {
    if E::IS_NATIVE {
        return;
    }

    let threads = num_cpus::get();

    if threads == 1 || values.len() < threads {
        return reverse_bytes_in_place(values);
    }

    let chunk_size = values.len().div_ceil(threads);

    values
        .par_chunks_mut(chunk_size)
        .for_each(|chunk| reverse_bytes_in_place(chunk));
}
