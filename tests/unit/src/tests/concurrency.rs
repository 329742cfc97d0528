use anyhow::Result;
use dicepass::{
    random::ScriptedSource, Generator, GeneratorOptions, WordList,
};
use std::{collections::HashSet, sync::Arc, thread};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shared_types_are_send_sync() {
    assert_send_sync::<Generator>();
    assert_send_sync::<WordList>();
    assert_send_sync::<GeneratorOptions>();
}

#[test]
fn generator_shared_between_threads() -> Result<()> {
    let generator = Generator::new(None)?;
    let generator = &generator;
    thread::scope(|scope| -> Result<()> {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || -> dicepass::Result<()> {
                    for _ in 0..500 {
                        let words = generator.generate(6)?;
                        let unique: HashSet<_> = words.iter().collect();
                        assert_eq!(6, unique.len());
                    }
                    Ok(())
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked")?;
        }
        Ok(())
    })
}

#[test]
fn scripted_source_shared_between_threads() -> Result<()> {
    // One die per word so every byte is a roll
    let list = WordList::from_words(
        "faces",
        1,
        ["one", "two", "three", "four", "five", "six"],
    )?;
    let source = Arc::new(ScriptedSource::new(
        (0..4_800u32).map(|i| (i % 6) as u8),
    ));
    let generator = Generator::new(Some(
        GeneratorOptions::default()
            .with_word_list(list)
            .with_random_source(source.clone()),
    ))?;

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let words = generator.generate(1).unwrap();
                    assert_eq!(1, words.len());
                }
            });
        }
    });
    assert_eq!(400, source.consumed());
    Ok(())
}
