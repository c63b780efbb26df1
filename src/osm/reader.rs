//! Drivers feeding a whole stream through a [`Decoder`].

use log::debug;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::io::Read;

use crate::error::CodecError;
use crate::osm::blob::{BlobItem, BlobIterator};
use crate::osm::block::BlockIterator;
use crate::osm::decoder::{BlockOutput, Decoder};
use crate::osm::sink::EntitySink;

/// Blobs decoded together per worker thread in [`par_read_all`].
const BLOBS_PER_THREAD: usize = 4;

/// Decodes every block of the stream in order, stopping at the first
/// failure.
pub fn read_all<R: Read, S: EntitySink + ?Sized>(
    reader: R,
    decoder: &Decoder,
    sink: &mut S,
) -> Result<(), CodecError> {
    for block in BlockIterator::new(reader) {
        decoder.handle_block(&block?, sink)?;
    }

    Ok(())
}

/// Decodes blocks on the rayon thread pool, delivering them to the sink
/// in the same order, and with the same failure point, as [`read_all`].
pub fn par_read_all<R: Read, S: EntitySink + ?Sized>(
    reader: R,
    decoder: &Decoder,
    sink: &mut S,
) -> Result<(), CodecError> {
    let batch_size = rayon::current_num_threads().max(1) * BLOBS_PER_THREAD;
    let mut blobs = BlobIterator::new(reader);

    loop {
        let mut batch: Vec<BlobItem> = Vec::with_capacity(batch_size);
        let mut failure = None;

        for blob in blobs.by_ref().take(batch_size) {
            match blob {
                Ok(blob) => batch.push(blob),
                Err(err) => {
                    failure = Some(err);
                    break;
                }
            }
        }

        if batch.is_empty() && failure.is_none() {
            return Ok(());
        }

        debug!("Decoding batch of {} blobs", batch.len());
        let outputs: Vec<Result<BlockOutput, CodecError>> = batch
            .into_par_iter()
            .map(|blob| -> Result<BlockOutput, CodecError> {
                Ok(decoder.decode_block(&blob.into_block()?)?)
            })
            .collect();

        for output in outputs {
            output?.deliver(sink);
        }

        if let Some(err) = failure {
            return Err(err);
        }
    }
}
