//! Seed corpus compiled into the binary at build time from `data/words.txt`

include!(concat!(env!("OUT_DIR"), "/seed_words.rs"));
