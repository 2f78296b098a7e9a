// Integration tests for the inline collections through the public API

use fixbuf_collections::{BoundedList, BoundedQueue, BoundedStack, ErrorKind, Result};

#[test]
fn queue_wraparound_scenario_preserves_fifo_order() -> Result<()> {
    let mut queue = BoundedQueue::<i32, 32>::new();

    for i in 0..32 {
        queue.enqueue(i)?;
    }
    assert_eq!(queue.len(), 32);
    assert!(queue.is_full());

    for expected in 0..16 {
        assert_eq!(queue.dequeue()?, expected);
    }
    assert_eq!(queue.len(), 16);
    assert_eq!(queue.head_slot(), 16);

    for i in 100..116 {
        queue.enqueue(i)?;
    }
    assert_eq!(queue.len(), 32);
    assert_eq!(queue.tail_slot(), 16);

    let mut drained = Vec::new();
    while let Some(item) = queue.try_dequeue() {
        drained.push(item);
    }

    let expected: Vec<i32> = (16..32).chain(100..116).collect();
    assert_eq!(drained, expected);
    Ok(())
}

#[test]
fn queue_full_cycle_restores_insertion_order() -> Result<()> {
    const K: usize = 11;
    let mut queue = BoundedQueue::<usize>::new();

    for i in 0..32 {
        queue.enqueue(i)?;
    }
    let mut removed = Vec::new();
    for _ in 0..K {
        removed.push(queue.dequeue()?);
    }
    for item in &removed {
        queue.enqueue(*item)?;
    }

    let drained: Vec<usize> = queue.into_iter().collect();
    let expected: Vec<usize> = (K..32).chain(0..K).collect();
    assert_eq!(drained, expected);
    Ok(())
}

#[test]
fn stack_push_pop_restores_count() -> Result<()> {
    let mut stack = BoundedStack::<char>::new();
    stack.push('x')?;
    let before = stack.len();

    stack.push('a')?;
    stack.push('b')?;
    stack.push('c')?;

    assert_eq!(stack.pop()?, 'c');
    assert_eq!(stack.pop()?, 'b');
    assert_eq!(stack.pop()?, 'a');
    assert_eq!(stack.len(), before);
    Ok(())
}

#[test]
fn stack_views_disagree_on_order() -> Result<()> {
    let mut stack = BoundedStack::<u8>::new();
    for i in 0..5 {
        stack.push(i)?;
    }

    let lifo: Vec<u8> = stack.iter().copied().collect();
    assert_eq!(lifo, vec![4, 3, 2, 1, 0]);
    assert_eq!(stack.as_slice(), &[0, 1, 2, 3, 4]);
    Ok(())
}

#[test]
fn full_containers_reject_growth_without_mutation() -> Result<()> {
    let seed: Vec<u16> = (0..32).collect();

    let mut list = BoundedList::<u16>::from_slice(&seed)?;
    assert_eq!(list.add(99).unwrap_err().kind(), ErrorKind::CapacityExceeded);
    assert_eq!(list.insert(0, 99).unwrap_err().kind(), ErrorKind::CapacityExceeded);
    assert_eq!(list.add_range(&[99]).unwrap_err().kind(), ErrorKind::CapacityExceeded);
    assert_eq!(list.as_slice(), seed.as_slice());

    let mut stack = BoundedStack::<u16>::new();
    for item in &seed {
        stack.push(*item)?;
    }
    assert_eq!(stack.push(99).unwrap_err().kind(), ErrorKind::CapacityExceeded);
    assert_eq!(stack.as_slice(), seed.as_slice());

    let mut queue = BoundedQueue::<u16>::new();
    for item in &seed {
        queue.enqueue(*item)?;
    }
    assert_eq!(queue.enqueue(99).unwrap_err().kind(), ErrorKind::CapacityExceeded);
    assert!(queue.iter().copied().eq(seed.iter().copied()));
    Ok(())
}

#[test]
fn empty_containers_reject_shrinking_without_mutation() {
    let mut list = BoundedList::<u16>::new();
    assert_eq!(list.remove_at(0).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert!(list.is_empty());

    let mut stack = BoundedStack::<u16>::new();
    assert_eq!(stack.pop().unwrap_err().kind(), ErrorKind::EmptyCollection);
    assert_eq!(stack.peek().unwrap_err().kind(), ErrorKind::EmptyCollection);
    assert!(stack.is_empty());

    let mut queue = BoundedQueue::<u16>::new();
    assert_eq!(queue.dequeue().unwrap_err().kind(), ErrorKind::EmptyCollection);
    assert_eq!(queue.peek().unwrap_err().kind(), ErrorKind::EmptyCollection);
    assert!(queue.is_empty());
    assert_eq!(queue.head_slot(), 0);
}

#[test]
fn list_remove_at_past_len_is_rejected() -> Result<()> {
    let mut list = BoundedList::<u16>::from_slice(&[1, 2, 3])?;
    assert_eq!(list.remove_at(3).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(list.as_slice(), &[1, 2, 3]);
    Ok(())
}

#[test]
fn clear_then_refill_reproduces_contents() -> Result<()> {
    let items = [5u32, 1, 4, 1, 5, 9, 2, 6];

    let mut list = BoundedList::<u32>::from_slice(&items)?;
    let list_before: Vec<u32> = list.iter().copied().collect();
    list.clear();
    list.add_range(&items)?;
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), list_before);

    let mut stack = BoundedStack::<u32>::new();
    items.iter().try_for_each(|item| stack.push(*item))?;
    let stack_before: Vec<u32> = stack.iter().copied().collect();
    stack.clear();
    items.iter().try_for_each(|item| stack.push(*item))?;
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), stack_before);

    let mut queue = BoundedQueue::<u32>::new();
    items.iter().try_for_each(|item| queue.enqueue(*item))?;
    queue.dequeue()?;
    queue.enqueue(items[0])?;
    let queue_before: Vec<u32> = queue.iter().copied().collect();
    queue.clear();
    queue_before.iter().try_for_each(|item| queue.enqueue(*item))?;
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), queue_before);
    Ok(())
}

#[test]
fn assignment_copies_whole_container() -> Result<()> {
    let mut queue = BoundedQueue::<u8, 8>::new();
    queue.enqueue(1)?;
    queue.enqueue(2)?;

    let mut copy = queue;
    copy.enqueue(3)?;
    *copy.peek_mut()? = 10;

    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec![10, 2, 3]);
    Ok(())
}

#[test]
fn containers_hold_plain_structs() -> Result<()> {
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Packet {
        id: u16,
        len: u16,
    }

    let mut list = BoundedList::<Packet, 4>::new();
    list.add(Packet { id: 1, len: 64 })?;
    list.add(Packet { id: 2, len: 128 })?;

    list[1].len = 256;
    assert!(list.contains(&Packet { id: 2, len: 256 }));
    assert_eq!(format!("{list:?}"), "[Packet { id: 1, len: 64 }, Packet { id: 2, len: 256 }]");
    Ok(())
}
