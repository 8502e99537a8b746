//! Lazy reward settlement against a cumulative rate index.
//!
//! Each policy change closes the open [`RateSegment`] and opens the next one at the index
//! value reached so far. A staker record points at the segment it was last settled in, so
//! settling reads at most two segments. A closed segment is dropped as soon as no record
//! points at it.

use soroban_sdk::{log, Env};

use crate::{
    error::{ErrorCode, StakingResult},
    storage::{
        get_current_segment_id, get_segment, remove_segment, save_current_segment_id,
        save_segment,
    },
    types::{RateSegment, Staker},
};

/// Opens the first segment. Called once, at initialization.
pub fn open(env: &Env, now: u64, apy: u32, accruing: bool) {
    save_segment(env, 0, &RateSegment::new(now, apy, accruing));
    save_current_segment_id(env, 0);
}

pub fn current_segment(env: &Env) -> StakingResult<(u32, RateSegment)> {
    let id = get_current_segment_id(env)?;
    Ok((id, get_segment(env, id)?))
}

/// Prices everything from `now` on at `apy`, accruing or not.
pub fn start_segment(env: &Env, now: u64, apy: u32, accruing: bool) -> StakingResult {
    let (id, mut segment) = current_segment(env)?;

    if now <= segment.start {
        segment.apy = apy;
        segment.accruing = accruing;
        save_segment(env, id, &segment);
        return Ok(());
    }

    let next_id = id.checked_add(1).ok_or(ErrorCode::MathError)?;
    let next = segment.next(env, now, apy, accruing)?;

    if segment.members == 0 {
        remove_segment(env, id);
    }
    save_segment(env, next_id, &next);
    save_current_segment_id(env, next_id);

    Ok(())
}

/// Re-prices the open segment from its start.
pub fn amend_current_apy(env: &Env, apy: u32) -> StakingResult {
    let (id, mut segment) = current_segment(env)?;
    segment.apy = apy;
    save_segment(env, id, &segment);

    Ok(())
}

/// Accrues `staker` up to `now` and files the record under the open segment.
pub fn settle(env: &Env, staker: &mut Staker, now: u64) -> StakingResult<i128> {
    let (current_id, mut current) = current_segment(env)?;
    let accrued = accrue(env, staker, current_id, &current, now)?;

    if staker.segment != Some(current_id) {
        if let Some(previous) = staker.segment {
            leave(env, previous)?;
        }
        current.members = current.members.checked_add(1).ok_or(ErrorCode::MathError)?;
        save_segment(env, current_id, &current);
        staker.segment = Some(current_id);
    }

    Ok(accrued)
}

/// Like [`settle`], but a reward that cannot be represented is forfeited instead of
/// failing, so principal can always leave.
pub fn settle_or_forfeit(env: &Env, staker: &mut Staker, now: u64) -> StakingResult<i128> {
    match settle(env, staker, now) {
        Err(ErrorCode::MathError) => {
            log!(env, "Ledger: rewards overflow, forfeiting {}", staker.rewards);
            staker.rewards = 0;
            staker.last_accrual_time = now;
            if let Some(previous) = staker.segment.take() {
                leave_any(env, previous)?;
            }
            settle(env, staker, now)
        }
        result => result,
    }
}

/// `staker` settled up to `now`, without writing anything.
pub fn settled(env: &Env, staker: &Staker, now: u64) -> StakingResult<Staker> {
    let (current_id, current) = current_segment(env)?;
    let mut view = staker.clone();
    accrue(env, &mut view, current_id, &current, now)?;

    Ok(view)
}

/// Drops the record's hold on its segment. Only valid once the balance is zero.
pub fn release(env: &Env, staker: &mut Staker) -> StakingResult {
    if let Some(id) = staker.segment.take() {
        leave_any(env, id)?;
    }

    Ok(())
}

fn accrue(
    env: &Env,
    staker: &mut Staker,
    current_id: u32,
    current: &RateSegment,
    now: u64,
) -> StakingResult<i128> {
    let from = match staker.segment {
        Some(id) if id == current_id => current.index_at(env, staker.last_accrual_time)?,
        Some(id) => get_segment(env, id)?.index_at(env, staker.last_accrual_time)?,
        None => return staker.accrue(env, 0, now),
    };
    let to = current.index_at(env, now)?;

    staker.accrue(env, to.checked_sub(from).ok_or(ErrorCode::MathError)?, now)
}

fn leave_any(env: &Env, id: u32) -> StakingResult {
    let (current_id, mut current) = current_segment(env)?;
    if id == current_id {
        current.members = current.members.checked_sub(1).ok_or(ErrorCode::MathError)?;
        save_segment(env, id, &current);
        return Ok(());
    }

    leave(env, id)
}

/// Drops one member from a closed segment, removing it when nobody is left.
fn leave(env: &Env, id: u32) -> StakingResult {
    let mut segment = get_segment(env, id)?;
    segment.members = segment.members.checked_sub(1).ok_or(ErrorCode::MathError)?;

    if segment.members == 0 {
        remove_segment(env, id);
    } else {
        save_segment(env, id, &segment);
    }

    Ok(())
}
