use rayon::prelude::*;

use viennacv_image::Image;
use viennacv_tensor::Tensor2;

/// Apply a function to each `(source, destination)` channel pair in parallel.
///
/// Each task owns one destination channel. Channels are paired by index, so
/// `src` and `dst` must hold the same number of channels.
pub(crate) fn par_iter_channels<T, E, F>(src: &Image<T>, dst: &mut Image<T>, f: F) -> Result<(), E>
where
    T: Send + Sync,
    E: Send,
    F: Fn(&Tensor2<T>, &mut Tensor2<T>) -> Result<(), E> + Send + Sync,
{
    dst.channels_mut()
        .par_iter_mut()
        .zip(src.channels().par_iter())
        .try_for_each(|(dst_ch, src_ch)| f(src_ch, dst_ch))
}
