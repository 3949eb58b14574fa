// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use logmerge_core::{AsyncSource, HasTimestamp, Record, Sink, Source};
use std::collections::VecDeque;
use std::convert::Infallible;

type Entry = Record<u64, &'static str>;

struct Queue(VecDeque<Record<u64, &'static str>>);

impl Source for Queue {
    type Item = Record<u64, &'static str>;
    type Error = Infallible;

    fn pop(&mut self) -> Result<Option<Self::Item>, Infallible> {
        Ok(self.0.pop_front())
    }
}

#[async_trait]
impl AsyncSource for Queue {
    type Item = Record<u64, &'static str>;
    type Error = Infallible;

    async fn pop(&mut self) -> Result<Option<Self::Item>, Infallible> {
        Ok(self.0.pop_front())
    }
}

#[derive(Default)]
struct Collect(Vec<u64>, usize);

impl Sink<Record<u64, &'static str>> for Collect {
    type Error = Infallible;

    fn emit(&mut self, record: Record<u64, &'static str>) -> Result<(), Infallible> {
        self.0.push(record.timestamp());
        Ok(())
    }

    fn done(&mut self) -> Result<(), Infallible> {
        self.1 += 1;
        Ok(())
    }
}

fn queue() -> Queue {
    Queue(VecDeque::from(vec![Record::new(1, "a"), Record::new(2, "b")]))
}

#[test]
fn test_record_exposes_timestamp_and_payload() {
    let record = Record::new(42_u64, "boot");

    assert_eq!(record.timestamp(), 42);
    assert_eq!(record.to_string(), "[42] boot");
    assert_eq!(record.into_payload(), "boot");
}

#[test]
fn test_boxed_record_delegates_timestamp() {
    let record: Box<Record<u64, ()>> = Box::new(Record::new(9, ()));
    assert_eq!(record.timestamp(), 9);
}

#[test]
fn test_boxed_source_delegates_pop() -> anyhow::Result<()> {
    let mut source: Box<dyn Source<Item = Record<u64, &'static str>, Error = Infallible>> =
        Box::new(queue());

    assert_eq!(source.pop()?.map(|r| r.timestamp), Some(1));
    assert_eq!(source.pop()?.map(|r| r.timestamp), Some(2));
    assert!(source.pop()?.is_none());
    assert!(source.pop()?.is_none());
    Ok(())
}

#[test]
fn test_borrowed_source_delegates_pop() -> anyhow::Result<()> {
    let mut owned = queue();
    {
        let mut borrowed = &mut owned;
        assert_eq!(Source::pop(&mut borrowed)?.map(|r| r.payload), Some("a"));
    }
    assert_eq!(Source::pop(&mut owned)?.map(|r| r.payload), Some("b"));
    Ok(())
}

#[tokio::test]
async fn test_boxed_async_source_delegates_pop() -> anyhow::Result<()> {
    let mut source: Box<dyn AsyncSource<Item = Record<u64, &'static str>, Error = Infallible>> =
        Box::new(queue());

    assert_eq!(source.pop().await?.map(|r| r.payload), Some("a"));
    assert_eq!(source.pop().await?.map(|r| r.payload), Some("b"));
    assert!(source.pop().await?.is_none());
    Ok(())
}

#[test]
fn test_borrowed_sink_delegates() -> anyhow::Result<()> {
    let mut sink = Collect::default();
    {
        let mut borrowed = &mut sink;
        <&mut Collect as Sink<Entry>>::emit(&mut borrowed, Record::new(3, "c"))?;
        <&mut Collect as Sink<Entry>>::done(&mut borrowed)?;
    }

    assert_eq!(sink.0, vec![3]);
    assert_eq!(sink.1, 1);
    Ok(())
}
