use crate::StrError;
use russell_lab::{Matrix, Vector};
use russell_sparse::CooMatrix;

/// Assembles local vector into global vector
///
/// # Output
///
/// * `ff_global` -- is the global vector F with length = `n_dof`
///
/// # Input
///
/// * `f_local` -- is the local vector f with length = `n_dof_local`
/// * `local_to_global` -- is an array holding all equation numbers of the element
///
/// **Note:** All rows are assembled, including the constrained ones. Thus, the global
/// vector holds the reactions too.
///
/// # Panics
///
/// This function will panic if the indices are out-of-bounds
#[inline]
pub fn assemble_vector(ff_global: &mut Vector, f_local: &Vector, local_to_global: &[usize]) {
    let n_dof_local = f_local.dim();
    for l in 0..n_dof_local {
        let g = local_to_global[l];
        ff_global[g] += f_local[l];
    }
}

/// Assembles local matrix into global matrix
///
/// # Output
///
/// * `kk_global` -- is the global square matrix K with dims = (`n_dof`,`n_dof`)
///
/// # Input
///
/// * `kk_local` -- is the local square matrix K with dims = (`n_dof_local`,`n_dof_local`)
/// * `local_to_global` -- is an array holding all equation numbers of the element
/// * `prescribed` -- tells whether a global equation number has a prescribed
///   DOF or not. Its length is equal to the total number of DOFs `n_dof`.
///
/// # Panics
///
/// This function will panic if the indices are out-of-bounds
#[inline]
pub fn assemble_matrix(
    kk_global: &mut CooMatrix,
    kk_local: &Matrix,
    local_to_global: &[usize],
    prescribed: &[bool],
) -> Result<(), StrError> {
    let n_dof_local = kk_local.dims().0;
    for l in 0..n_dof_local {
        let g = local_to_global[l];
        if !prescribed[g] {
            for ll in 0..n_dof_local {
                let gg = local_to_global[ll];
                if !prescribed[gg] {
                    kk_global.put(g, gg, kk_local.get(l, ll))?;
                }
            }
        }
    }
    Ok(())
}

/// Adds the contribution of known (prescribed) increments to the free rows of the residual
///
/// Computes:
///
/// ```text
/// rr[free] += kk_local[free,prescribed] · ddu_bar[prescribed]
/// ```
///
/// # Output
///
/// * `rr_global` -- is the global residual vector R with length = `n_dof`
///
/// # Input
///
/// * `kk_local` -- is the local square matrix K with dims = (`n_dof_local`,`n_dof_local`)
/// * `local_to_global` -- is an array holding all equation numbers of the element
/// * `prescribed` -- tells whether a global equation number has a prescribed DOF or not
/// * `ddu_bar` -- holds the prescribed increments (only the prescribed entries are accessed)
///
/// # Panics
///
/// This function will panic if the indices are out-of-bounds
#[inline]
pub fn assemble_lifting(
    rr_global: &mut Vector,
    kk_local: &Matrix,
    local_to_global: &[usize],
    prescribed: &[bool],
    ddu_bar: &Vector,
) {
    let n_dof_local = kk_local.dims().0;
    for l in 0..n_dof_local {
        let g = local_to_global[l];
        if !prescribed[g] {
            for ll in 0..n_dof_local {
                let gg = local_to_global[ll];
                if prescribed[gg] {
                    rr_global[g] += kk_local.get(l, ll) * ddu_bar[gg];
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{assemble_lifting, assemble_matrix, assemble_vector};
    use russell_lab::{Matrix, Vector};
    use russell_sparse::{CooMatrix, Sym};

    #[test]
    fn assemble_vector_works() {
        // {0}----[0]----{1}----[1]----{2}
        let l2g = vec![vec![0, 1], vec![1, 2]];
        let mut ff = Vector::new(3);
        let f0 = Vector::from(&[1.0, 2.0]);
        let f1 = Vector::from(&[10.0, 20.0]);
        assemble_vector(&mut ff, &f0, &l2g[0]);
        assemble_vector(&mut ff, &f1, &l2g[1]);
        assert_eq!(ff.as_data(), &[1.0, 12.0, 20.0]);
    }

    #[test]
    fn assemble_matrix_works() {
        // {0}----[0]----{1}----[1]----{2}
        //  ^ prescribed
        let l2g = vec![vec![0, 1], vec![1, 2]];
        let prescribed = vec![true, false, false];
        let mut kk = CooMatrix::new(3, 3, 8, Sym::No).unwrap();
        #[rustfmt::skip]
        let kk0 = Matrix::from(&[
            [ 1.0, -1.0],
            [-1.0,  1.0],
        ]);
        #[rustfmt::skip]
        let kk1 = Matrix::from(&[
            [ 2.0, -2.0],
            [-2.0,  2.0],
        ]);
        assemble_matrix(&mut kk, &kk0, &l2g[0], &prescribed).unwrap();
        assemble_matrix(&mut kk, &kk1, &l2g[1], &prescribed).unwrap();
        kk.put(0, 0, 1.0).unwrap();
        let mat = kk.as_dense();
        #[rustfmt::skip]
        let correct = Matrix::from(&[
            [1.0,  0.0,  0.0],
            [0.0,  3.0, -2.0],
            [0.0, -2.0,  2.0],
        ]);
        assert_eq!(mat.as_data(), correct.as_data());
    }

    #[test]
    fn assemble_lifting_works() {
        // {0}----[0]----{1}----[1]----{2}
        //  ^ prescribed                ^ prescribed
        let l2g = vec![vec![0, 1], vec![1, 2]];
        let prescribed = vec![true, false, true];
        let ddu_bar = Vector::from(&[0.5, 123.0, 2.0]);
        #[rustfmt::skip]
        let kk0 = Matrix::from(&[
            [ 1.0, -1.0],
            [-1.0,  1.0],
        ]);
        #[rustfmt::skip]
        let kk1 = Matrix::from(&[
            [ 2.0, -2.0],
            [-2.0,  2.0],
        ]);
        let mut rr = Vector::new(3);
        assemble_lifting(&mut rr, &kk0, &l2g[0], &prescribed, &ddu_bar);
        assemble_lifting(&mut rr, &kk1, &l2g[1], &prescribed, &ddu_bar);
        // only the free row receives: -1·0.5 - 2·2.0
        assert_eq!(rr.as_data(), &[0.0, -4.5, 0.0]);
    }
}
