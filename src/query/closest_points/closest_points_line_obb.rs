use crate::math::{Point, Real, Vector, DIM};

/// Result of the local line/box closest-point analysis.
#[derive(Copy, Clone, Debug)]
pub struct LineObbProjection {
    /// Signed offset, along the line direction and from the line origin, of
    /// the closest line point. Measured in units of the direction's length.
    pub line_parameter: Real,
    /// The closest point on the box, in box-local coordinates.
    pub local_point: Point<Real>,
    /// The squared distance between the line and the box. Zero when the
    /// line crosses the box.
    pub distance_squared: Real,
}

struct QueryState {
    sqr_distance: Real,
    line_parameter: Real,
}

/// Closest point between a line and a box, in the box's local frame.
///
/// `origin` and `dir` must be expressed in box-local coordinates. When
/// `origin` lies inside the box and `dir` is nonzero,
/// `origin + dir * line_parameter` is the point where the line exits
/// through the box boundary.
///
/// The case analysis first folds the query into the non-negative octant:
/// flipping the sign of a point coordinate together with the matching
/// direction coordinate leaves the query unchanged and halves the case
/// count per axis. The fold guarantees every divisor below is a strictly
/// positive direction component or a sum of their squares.
pub fn closest_points_line_obb_local(
    origin: &Point<Real>,
    dir: &Vector<Real>,
    half_extents: &Vector<Real>,
) -> LineObbProjection {
    let mut pnt = *origin;
    let mut dir = *dir;
    let mut reflect = [false; DIM];

    for i in 0..DIM {
        if dir[i] < 0.0 {
            pnt[i] = -pnt[i];
            dir[i] = -dir[i];
            reflect[i] = true;
        }
    }

    let mut state = QueryState {
        sqr_distance: 0.0,
        line_parameter: 0.0,
    };

    // Dispatch on which folded components are strictly positive. Components
    // that are exactly zero must be special-cased before the general face
    // resolution, whose divisions assume them positive.
    if dir[0] > 0.0 {
        if dir[1] > 0.0 {
            if dir[2] > 0.0 {
                case_no_zeros(&mut pnt, &dir, half_extents, &mut state);
            } else {
                case_0(0, 1, 2, &mut pnt, &dir, half_extents, &mut state);
            }
        } else if dir[2] > 0.0 {
            case_0(0, 2, 1, &mut pnt, &dir, half_extents, &mut state);
        } else {
            case_00(0, 1, 2, &mut pnt, &dir, half_extents, &mut state);
        }
    } else if dir[1] > 0.0 {
        if dir[2] > 0.0 {
            case_0(1, 2, 0, &mut pnt, &dir, half_extents, &mut state);
        } else {
            case_00(1, 0, 2, &mut pnt, &dir, half_extents, &mut state);
        }
    } else if dir[2] > 0.0 {
        case_00(2, 0, 1, &mut pnt, &dir, half_extents, &mut state);
    } else {
        case_000(&mut pnt, half_extents, &mut state);
    }

    for i in 0..DIM {
        if reflect[i] {
            pnt[i] = -pnt[i];
        }
    }

    LineObbProjection {
        line_parameter: state.line_parameter,
        local_point: pnt,
        distance_squared: state.sqr_distance,
    }
}

// All three direction components are positive: pick the face the line
// leaves through by comparing the direction against the corner `pnt - e`,
// then resolve against the two remaining faces.
fn case_no_zeros(
    pnt: &mut Point<Real>,
    dir: &Vector<Real>,
    half_extents: &Vector<Real>,
    state: &mut QueryState,
) {
    let pme = Vector::new(
        pnt.x - half_extents.x,
        pnt.y - half_extents.y,
        pnt.z - half_extents.z,
    );

    let prod_dx_py = dir.x * pme.y;
    let prod_dy_px = dir.y * pme.x;

    if prod_dy_px >= prod_dx_py {
        let prod_dz_px = dir.z * pme.x;
        let prod_dx_pz = dir.x * pme.z;
        if prod_dz_px >= prod_dx_pz {
            // The line reaches the x face first.
            face(0, 1, 2, pnt, dir, &pme, half_extents, state);
        } else {
            // The line reaches the z face first.
            face(2, 0, 1, pnt, dir, &pme, half_extents, state);
        }
    } else {
        let prod_dz_py = dir.z * pme.y;
        let prod_dy_pz = dir.y * pme.z;
        if prod_dz_py >= prod_dy_pz {
            // The line reaches the y face first.
            face(1, 2, 0, pnt, dir, &pme, half_extents, state);
        } else {
            // The line reaches the z face first.
            face(2, 0, 1, pnt, dir, &pme, half_extents, state);
        }
    }
}

// Resolution against the `i0` face: the `i1`/`i2` comparisons decide
// between the face interior, one of its two adjacent edges, or their shared
// corner. The `tmp <= 2 * len_sqr * half_extents[_]` test distinguishes an
// exit through the face strip from an exit past the opposite edge.
#[allow(clippy::too_many_arguments)]
fn face(
    i0: usize,
    i1: usize,
    i2: usize,
    pnt: &mut Point<Real>,
    dir: &Vector<Real>,
    pme: &Vector<Real>,
    half_extents: &Vector<Real>,
    state: &mut QueryState,
) {
    let mut ppe: Vector<Real> = Vector::zeros();
    ppe[i1] = pnt[i1] + half_extents[i1];
    ppe[i2] = pnt[i2] + half_extents[i2];

    if dir[i0] * ppe[i1] >= dir[i1] * pme[i0] {
        if dir[i0] * ppe[i2] >= dir[i2] * pme[i0] {
            // The line exits through the face interior.
            pnt[i0] = half_extents[i0];
            let inv = 1.0 / dir[i0];
            pnt[i1] -= dir[i1] * pme[i0] * inv;
            pnt[i2] -= dir[i2] * pme[i0] * inv;
            state.line_parameter = -pme[i0] * inv;
        } else {
            // Closest to the edge shared with the -i2 face.
            let mut len_sqr = dir[i0] * dir[i0] + dir[i2] * dir[i2];
            let mut tmp =
                len_sqr * ppe[i1] - dir[i1] * (dir[i0] * pme[i0] + dir[i2] * ppe[i2]);
            if tmp <= 2.0 * len_sqr * half_extents[i1] {
                let t = tmp / len_sqr;
                len_sqr += dir[i1] * dir[i1];
                tmp = ppe[i1] - t;
                let delta = dir[i0] * pme[i0] + dir[i1] * tmp + dir[i2] * ppe[i2];
                let param = -delta / len_sqr;
                state.sqr_distance +=
                    pme[i0] * pme[i0] + tmp * tmp + ppe[i2] * ppe[i2] + delta * param;
                state.line_parameter = param;
                pnt[i0] = half_extents[i0];
                pnt[i1] = t - half_extents[i1];
                pnt[i2] = -half_extents[i2];
            } else {
                len_sqr += dir[i1] * dir[i1];
                let delta = dir[i0] * pme[i0] + dir[i1] * pme[i1] + dir[i2] * ppe[i2];
                let param = -delta / len_sqr;
                state.sqr_distance += pme[i0] * pme[i0]
                    + pme[i1] * pme[i1]
                    + ppe[i2] * ppe[i2]
                    + delta * param;
                state.line_parameter = param;
                pnt[i0] = half_extents[i0];
                pnt[i1] = half_extents[i1];
                pnt[i2] = -half_extents[i2];
            }
        }
    } else if dir[i0] * ppe[i2] >= dir[i2] * pme[i0] {
        // Closest to the edge shared with the -i1 face.
        let mut len_sqr = dir[i0] * dir[i0] + dir[i1] * dir[i1];
        let mut tmp = len_sqr * ppe[i2] - dir[i2] * (dir[i0] * pme[i0] + dir[i1] * ppe[i1]);
        if tmp <= 2.0 * len_sqr * half_extents[i2] {
            let t = tmp / len_sqr;
            len_sqr += dir[i2] * dir[i2];
            tmp = ppe[i2] - t;
            let delta = dir[i0] * pme[i0] + dir[i1] * ppe[i1] + dir[i2] * tmp;
            let param = -delta / len_sqr;
            state.sqr_distance +=
                pme[i0] * pme[i0] + ppe[i1] * ppe[i1] + tmp * tmp + delta * param;
            state.line_parameter = param;
            pnt[i0] = half_extents[i0];
            pnt[i1] = -half_extents[i1];
            pnt[i2] = t - half_extents[i2];
        } else {
            len_sqr += dir[i2] * dir[i2];
            let delta = dir[i0] * pme[i0] + dir[i1] * ppe[i1] + dir[i2] * pme[i2];
            let param = -delta / len_sqr;
            state.sqr_distance +=
                pme[i0] * pme[i0] + ppe[i1] * ppe[i1] + pme[i2] * pme[i2] + delta * param;
            state.line_parameter = param;
            pnt[i0] = half_extents[i0];
            pnt[i1] = -half_extents[i1];
            pnt[i2] = half_extents[i2];
        }
    } else {
        // Both edge tests failed: try each edge strip, else the corner.
        let mut len_sqr = dir[i0] * dir[i0] + dir[i2] * dir[i2];
        let mut tmp = len_sqr * ppe[i1] - dir[i1] * (dir[i0] * pme[i0] + dir[i2] * ppe[i2]);
        if tmp >= 0.0 {
            // The -i2 edge region.
            if tmp <= 2.0 * len_sqr * half_extents[i1] {
                let t = tmp / len_sqr;
                len_sqr += dir[i1] * dir[i1];
                tmp = ppe[i1] - t;
                let delta = dir[i0] * pme[i0] + dir[i1] * tmp + dir[i2] * ppe[i2];
                let param = -delta / len_sqr;
                state.sqr_distance +=
                    pme[i0] * pme[i0] + tmp * tmp + ppe[i2] * ppe[i2] + delta * param;
                state.line_parameter = param;
                pnt[i0] = half_extents[i0];
                pnt[i1] = t - half_extents[i1];
                pnt[i2] = -half_extents[i2];
            } else {
                len_sqr += dir[i1] * dir[i1];
                let delta = dir[i0] * pme[i0] + dir[i1] * pme[i1] + dir[i2] * ppe[i2];
                let param = -delta / len_sqr;
                state.sqr_distance += pme[i0] * pme[i0]
                    + pme[i1] * pme[i1]
                    + ppe[i2] * ppe[i2]
                    + delta * param;
                state.line_parameter = param;
                pnt[i0] = half_extents[i0];
                pnt[i1] = half_extents[i1];
                pnt[i2] = -half_extents[i2];
            }
            return;
        }

        len_sqr = dir[i0] * dir[i0] + dir[i1] * dir[i1];
        tmp = len_sqr * ppe[i2] - dir[i2] * (dir[i0] * pme[i0] + dir[i1] * ppe[i1]);
        if tmp >= 0.0 {
            // The -i1 edge region.
            if tmp <= 2.0 * len_sqr * half_extents[i2] {
                let t = tmp / len_sqr;
                len_sqr += dir[i2] * dir[i2];
                tmp = ppe[i2] - t;
                let delta = dir[i0] * pme[i0] + dir[i1] * ppe[i1] + dir[i2] * tmp;
                let param = -delta / len_sqr;
                state.sqr_distance +=
                    pme[i0] * pme[i0] + ppe[i1] * ppe[i1] + tmp * tmp + delta * param;
                state.line_parameter = param;
                pnt[i0] = half_extents[i0];
                pnt[i1] = -half_extents[i1];
                pnt[i2] = t - half_extents[i2];
            } else {
                len_sqr += dir[i2] * dir[i2];
                let delta = dir[i0] * pme[i0] + dir[i1] * ppe[i1] + dir[i2] * pme[i2];
                let param = -delta / len_sqr;
                state.sqr_distance += pme[i0] * pme[i0]
                    + ppe[i1] * ppe[i1]
                    + pme[i2] * pme[i2]
                    + delta * param;
                state.line_parameter = param;
                pnt[i0] = half_extents[i0];
                pnt[i1] = -half_extents[i1];
                pnt[i2] = half_extents[i2];
            }
            return;
        }

        // The corner region.
        len_sqr += dir[i2] * dir[i2];
        let delta = dir[i0] * pme[i0] + dir[i1] * ppe[i1] + dir[i2] * ppe[i2];
        let param = -delta / len_sqr;
        state.sqr_distance +=
            pme[i0] * pme[i0] + ppe[i1] * ppe[i1] + ppe[i2] * ppe[i2] + delta * param;
        state.line_parameter = param;
        pnt[i0] = half_extents[i0];
        pnt[i1] = -half_extents[i1];
        pnt[i2] = -half_extents[i2];
    }
}

// Two positive components: planar resolution in the (i0, i1) plane, then a
// plain clamp on the untouched i2 axis.
fn case_0(
    i0: usize,
    i1: usize,
    i2: usize,
    pnt: &mut Point<Real>,
    dir: &Vector<Real>,
    half_extents: &Vector<Real>,
    state: &mut QueryState,
) {
    let pme0 = pnt[i0] - half_extents[i0];
    let pme1 = pnt[i1] - half_extents[i1];
    let prod0 = dir[i1] * pme0;
    let prod1 = dir[i0] * pme1;

    if prod0 >= prod1 {
        // The line reaches the i0 face first.
        pnt[i0] = half_extents[i0];

        let ppe1 = pnt[i1] + half_extents[i1];
        let delta = prod0 - dir[i0] * ppe1;
        if delta >= 0.0 {
            let inv_lsqr = 1.0 / (dir[i0] * dir[i0] + dir[i1] * dir[i1]);
            state.sqr_distance += delta * delta * inv_lsqr;
            pnt[i1] = -half_extents[i1];
            state.line_parameter = -(dir[i0] * pme0 + dir[i1] * ppe1) * inv_lsqr;
        } else {
            let inv = 1.0 / dir[i0];
            pnt[i1] -= prod0 * inv;
            state.line_parameter = -pme0 * inv;
        }
    } else {
        // The line reaches the i1 face first.
        pnt[i1] = half_extents[i1];

        let ppe0 = pnt[i0] + half_extents[i0];
        let delta = prod1 - dir[i1] * ppe0;
        if delta >= 0.0 {
            let inv_lsqr = 1.0 / (dir[i0] * dir[i0] + dir[i1] * dir[i1]);
            state.sqr_distance += delta * delta * inv_lsqr;
            pnt[i0] = -half_extents[i0];
            state.line_parameter = -(dir[i1] * pme1 + dir[i0] * ppe0) * inv_lsqr;
        } else {
            let inv = 1.0 / dir[i1];
            pnt[i0] -= prod1 * inv;
            state.line_parameter = -pme1 * inv;
        }
    }

    if pnt[i2] < -half_extents[i2] {
        let delta = pnt[i2] + half_extents[i2];
        state.sqr_distance += delta * delta;
        pnt[i2] = -half_extents[i2];
    } else if pnt[i2] > half_extents[i2] {
        let delta = pnt[i2] - half_extents[i2];
        state.sqr_distance += delta * delta;
        pnt[i2] = half_extents[i2];
    }
}

// A single positive component: the exit parameter is immediate and the two
// remaining axes reduce to a point/box clamp.
fn case_00(
    i0: usize,
    i1: usize,
    i2: usize,
    pnt: &mut Point<Real>,
    dir: &Vector<Real>,
    half_extents: &Vector<Real>,
    state: &mut QueryState,
) {
    state.line_parameter = (half_extents[i0] - pnt[i0]) / dir[i0];
    pnt[i0] = half_extents[i0];

    for i in [i1, i2] {
        if pnt[i] < -half_extents[i] {
            let delta = pnt[i] + half_extents[i];
            state.sqr_distance += delta * delta;
            pnt[i] = -half_extents[i];
        } else if pnt[i] > half_extents[i] {
            let delta = pnt[i] - half_extents[i];
            state.sqr_distance += delta * delta;
            pnt[i] = half_extents[i];
        }
    }
}

// Fully degenerate direction: plain point/box clamp, the parameter stays 0.
fn case_000(pnt: &mut Point<Real>, half_extents: &Vector<Real>, state: &mut QueryState) {
    for i in 0..DIM {
        if pnt[i] < -half_extents[i] {
            let delta = pnt[i] + half_extents[i];
            state.sqr_distance += delta * delta;
            pnt[i] = -half_extents[i];
        } else if pnt[i] > half_extents[i] {
            let delta = pnt[i] - half_extents[i];
            state.sqr_distance += delta * delta;
            pnt[i] = half_extents[i];
        }
    }
}
