//! Structure model - the main container and direct stiffness engine

use log::{debug, info};
use nalgebra::linalg::LU;
use nalgebra::Dyn;
use serde::{Deserialize, Serialize};

use crate::dof::DofVector;
use crate::elements::{ElementKind, Fixity, Material, Member, MemberForce, Node, Section};
use crate::error::{ModelError, ModelResult};
use crate::math::{self, Mat, Vec as FEVec};

/// Precomputed member geometry: length and direction cosines
#[derive(Debug, Clone, Copy)]
struct MemberGeometry {
    length: f64,
    l: f64,
    m: f64,
}

/// Reduced system built once per topology and reused across load cases
#[derive(Debug, Clone)]
struct ReducedSystem {
    free: Vec<usize>,
    k_reduced: Mat,
    lu: LU<f64, Dyn, Dyn>,
}

/// The main 2D structural model
///
/// A structure owns its nodes and members in insertion order, plus default
/// section/material property sets applied to members that omit explicit
/// ones. The element kind fixes the DOFs per node and the stiffness kernel.
///
/// The lifecycle has two phases: build (add nodes and members, in order,
/// endpoints always referencing existing nodes) and solved. The first
/// successful solve freezes the topology; solving again with a different
/// load vector is always allowed and overwrites the result fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    kind: ElementKind,
    nodes: Vec<Node>,
    members: Vec<Member>,
    default_section: Section,
    default_material: Material,

    #[serde(skip)]
    system: Option<ReducedSystem>,
    #[serde(skip)]
    solved: bool,
}

impl Structure {
    /// Create an empty structure of the given element kind
    pub fn new(kind: ElementKind, section: Section, material: Material) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            members: Vec::new(),
            default_section: section,
            default_material: material,
            system: None,
            solved: false,
        }
    }

    /// Create an empty truss structure
    pub fn truss(section: Section, material: Material) -> Self {
        Self::new(ElementKind::Truss, section, material)
    }

    /// Create an empty frame structure
    pub fn frame(section: Section, material: Material) -> Self {
        Self::new(ElementKind::Frame, section, material)
    }

    // ========================
    // Build Phase
    // ========================

    /// Add a node at (x, y) with a named fixity
    ///
    /// Returns the node's insertion-order index. Fails with `InvalidFixity`
    /// for an unrecognized fixity name, or `TopologyFrozen` once the
    /// structure has been solved.
    pub fn add_node(&mut self, x: f64, y: f64, fixity: &str) -> ModelResult<usize> {
        if self.system.is_some() {
            return Err(ModelError::TopologyFrozen);
        }
        let fixity = fixity.parse::<Fixity>()?;
        let index = self.nodes.len();
        self.nodes.push(Node::new(x, y, index, fixity));
        Ok(index)
    }

    /// Add a member with the structure's default section and material
    pub fn add_member(&mut self, start: usize, end: usize) -> ModelResult<usize> {
        self.add_member_with(start, end, self.default_section, self.default_material)
    }

    /// Add a member with an explicit section and material
    ///
    /// Both endpoints must reference nodes already in the structure, must
    /// differ, and must not coincide geometrically.
    pub fn add_member_with(
        &mut self,
        start: usize,
        end: usize,
        section: Section,
        material: Material,
    ) -> ModelResult<usize> {
        if self.system.is_some() {
            return Err(ModelError::TopologyFrozen);
        }
        if start >= self.nodes.len() {
            return Err(ModelError::NodeNotFound(start));
        }
        if end >= self.nodes.len() {
            return Err(ModelError::NodeNotFound(end));
        }
        if start == end {
            return Err(ModelError::InvalidGeometry(format!(
                "member endpoints must differ (both are node {start})"
            )));
        }
        let length = self.nodes[start].distance_to(&self.nodes[end]);
        if length < 1e-10 {
            return Err(ModelError::InvalidGeometry(format!(
                "member from node {start} to node {end} has zero length"
            )));
        }

        let index = self.members.len();
        self.members.push(Member::new(start, end, section, material));
        Ok(index)
    }

    // ========================
    // Topology Access
    // ========================

    /// Element kind of this structure
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All members in insertion order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Get a node by index
    pub fn node(&self, index: usize) -> ModelResult<&Node> {
        self.nodes.get(index).ok_or(ModelError::NodeNotFound(index))
    }

    /// Get a member by index
    pub fn member(&self, index: usize) -> ModelResult<&Member> {
        self.members
            .get(index)
            .ok_or(ModelError::MemberNotFound(index))
    }

    pub(crate) fn member_mut(&mut self, index: usize) -> Option<&mut Member> {
        self.members.get_mut(index)
    }

    /// Number of nodes
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of members
    pub fn n_members(&self) -> usize {
        self.members.len()
    }

    /// Total number of degrees of freedom
    pub fn total_dofs(&self) -> usize {
        self.kind.dofs_per_node() * self.nodes.len()
    }

    /// Length of a member
    pub fn member_length(&self, index: usize) -> ModelResult<f64> {
        let member = self.member(index)?;
        Ok(self.member_geometry(member).length)
    }

    /// Whether displacement and force results are populated
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    fn member_geometry(&self, member: &Member) -> MemberGeometry {
        let start = &self.nodes[member.start];
        let end = &self.nodes[member.end];
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let length = (dx * dx + dy * dy).sqrt();
        MemberGeometry {
            length,
            l: dx / length,
            m: dy / length,
        }
    }

    /// Global DOF indices touched by a member: start-node block then
    /// end-node block, node-major
    fn member_dofs(&self, member: &Member) -> Vec<usize> {
        let dpn = self.kind.dofs_per_node();
        let mut dofs = Vec::with_capacity(2 * dpn);
        for i in 0..dpn {
            dofs.push(dpn * member.start + i);
        }
        for i in 0..dpn {
            dofs.push(dpn * member.end + i);
        }
        dofs
    }

    // ========================
    // Assembly and Partition
    // ========================

    /// Global stiffness contribution of one member, in structure coordinates
    pub fn member_global_stiffness(&self, member: &Member) -> Mat {
        let g = self.member_geometry(member);
        match self.kind {
            ElementKind::Truss => {
                let k = math::truss_global_stiffness(
                    member.material.e,
                    member.section.a,
                    g.length,
                    g.l,
                    g.m,
                );
                Mat::from_fn(4, 4, |i, j| k[(i, j)])
            }
            ElementKind::Frame => {
                let k = math::frame_global_stiffness(
                    member.material.e,
                    member.section.a,
                    member.section.ix,
                    g.length,
                    g.l,
                    g.m,
                );
                Mat::from_fn(6, 6, |i, j| k[(i, j)])
            }
        }
    }

    /// Assemble the global stiffness matrix
    ///
    /// Each member's transformed stiffness is scatter-added into the rows
    /// and columns of its DOF index list, so members sharing a node
    /// superpose. The result is symmetric.
    pub fn global_stiffness(&self) -> Mat {
        let n_dofs = self.total_dofs();
        let mut k_global = Mat::zeros(n_dofs, n_dofs);

        for member in &self.members {
            let k_member = self.member_global_stiffness(member);
            let dofs = self.member_dofs(member);

            for (a, &i) in dofs.iter().enumerate() {
                for (b, &j) in dofs.iter().enumerate() {
                    k_global[(i, j)] += k_member[(a, b)];
                }
            }
        }

        debug!(
            "assembled global stiffness: {} nodes, {} members, {} DOFs",
            self.nodes.len(),
            self.members.len(),
            n_dofs
        );
        k_global
    }

    /// Per-DOF free flags, node-major (true = free, false = restrained)
    pub fn boundary_conditions(&self) -> Vec<bool> {
        let mut flags = Vec::with_capacity(self.total_dofs());
        for node in &self.nodes {
            flags.extend_from_slice(node.fixity.free_flags(self.kind));
        }
        flags
    }

    /// Indices of unconstrained DOFs
    pub fn free_dofs(&self) -> Vec<usize> {
        self.boundary_conditions()
            .iter()
            .enumerate()
            .filter_map(|(i, &free)| free.then_some(i))
            .collect()
    }

    /// Global stiffness matrix restricted to free rows and columns
    pub fn reduced_stiffness(&self) -> Mat {
        if let Some(system) = &self.system {
            return system.k_reduced.clone();
        }
        let k_global = self.global_stiffness();
        let free = self.free_dofs();
        Mat::from_fn(free.len(), free.len(), |i, j| k_global[(free[i], free[j])])
    }

    /// Build the reduced system: partition, validate stability, factorize
    fn build_system(&self) -> ModelResult<ReducedSystem> {
        let k_global = self.global_stiffness();
        let free = self.free_dofs();
        let k_reduced = Mat::from_fn(free.len(), free.len(), |i, j| k_global[(free[i], free[j])]);

        if let Some(eigenvalue) = math::near_zero_eigenvalue(&k_reduced, math::STABILITY_TOLERANCE) {
            return Err(ModelError::UnstableStructure(eigenvalue));
        }

        debug!(
            "reduced system: {} free of {} total DOFs",
            free.len(),
            self.total_dofs()
        );
        let lu = LU::new(k_reduced.clone());
        Ok(ReducedSystem {
            free,
            k_reduced,
            lu,
        })
    }

    // ========================
    // Solve
    // ========================

    /// Execute the direct stiffness method for the given loading
    ///
    /// Solves `K_reduced * d_free = F_reduced` and writes per-node
    /// displacements and per-member internal forces. The reduced system is
    /// built (and the structure's stability validated) on the first call,
    /// then reused for subsequent load cases. On any failure the existing
    /// result fields are left untouched.
    pub fn solve(&mut self, loads: &DofVector) -> ModelResult<()> {
        if loads.kind() != self.kind {
            return Err(ModelError::InvalidLoadInput(format!(
                "load vector was built for {} elements but the structure uses {} elements",
                loads.kind().label(),
                self.kind.label()
            )));
        }
        let n_dofs = self.total_dofs();
        if loads.len() != n_dofs {
            return Err(ModelError::InvalidLoadInput(format!(
                "expected {} entries but got {}",
                n_dofs,
                loads.len()
            )));
        }

        if self.system.is_none() {
            self.system = Some(self.build_system()?);
        }
        let system = self.system.as_ref().unwrap();

        let f = loads.as_vector();
        let f_reduced = FEVec::from_fn(system.free.len(), |i, _| f[system.free[i]]);

        let d_free = if system.free.is_empty() {
            FEVec::zeros(0)
        } else {
            system
                .lu
                .solve(&f_reduced)
                .ok_or(ModelError::UnstableStructure(0.0))?
        };

        // Expand back to the full DOF vector; restrained DOFs stay zero
        let free = system.free.clone();
        let mut d_full = FEVec::zeros(n_dofs);
        for (i, &dof) in free.iter().enumerate() {
            d_full[dof] = d_free[i];
        }

        let dpn = self.kind.dofs_per_node();
        for node in self.nodes.iter_mut() {
            let base = dpn * node.index;
            node.displacement = Some((0..dpn).map(|i| d_full[base + i]).collect());
        }

        let forces: Vec<MemberForce> = self
            .members
            .iter()
            .map(|member| self.recover_member_force(member, &d_full))
            .collect();
        for (member, force) in self.members.iter_mut().zip(forces) {
            member.force = Some(force);
        }

        self.solved = true;
        info!(
            "solved {} structure: {} nodes, {} members, {} free DOFs",
            self.kind.label(),
            self.nodes.len(),
            self.members.len(),
            free.len()
        );
        Ok(())
    }

    /// Convenience wrapper taking a flat node-major load slice
    pub fn solve_slice(&mut self, loads: &[f64]) -> ModelResult<()> {
        let loads = DofVector::from_slice(self.kind, self.n_nodes(), loads)?;
        self.solve(&loads)
    }

    /// Recover a member's internal forces from the full displacement vector
    fn recover_member_force(&self, member: &Member, d_full: &FEVec) -> MemberForce {
        let g = self.member_geometry(member);
        let dofs = self.member_dofs(member);

        match self.kind {
            ElementKind::Truss => {
                let d = math::Vec4::from_iterator(dofs.iter().map(|&i| d_full[i]));
                let axial = math::truss_axial_force(
                    member.material.e,
                    member.section.a,
                    g.length,
                    g.l,
                    g.m,
                    &d,
                );
                MemberForce::axial_only(axial)
            }
            ElementKind::Frame => {
                let d = math::Vec6::from_iterator(dofs.iter().map(|&i| d_full[i]));
                let f_local = math::frame_end_forces(
                    member.material.e,
                    member.section.a,
                    member.section.ix,
                    g.length,
                    g.l,
                    g.m,
                    &d,
                );
                // Axial from the translational DOFs, matching the truss recovery
                let d_axial = math::Vec4::new(d[0], d[1], d[3], d[4]);
                let axial = math::truss_axial_force(
                    member.material.e,
                    member.section.a,
                    g.length,
                    g.l,
                    g.m,
                    &d_axial,
                );
                MemberForce {
                    axial,
                    shear: f_local[1],
                    moment: f_local[2],
                }
            }
        }
    }

    // ========================
    // Result Access
    // ========================

    /// Get a node's solved displacement sub-vector
    pub fn node_displacement(&self, index: usize) -> ModelResult<&[f64]> {
        self.node(index)?.displacement().ok_or(ModelError::NotSolved)
    }

    /// Get a member's solved internal force
    pub fn member_force(&self, index: usize) -> ModelResult<&MemberForce> {
        self.member(index)?.force().ok_or(ModelError::NotSolved)
    }

    /// Get a member's solved axial force
    pub fn member_axial(&self, index: usize) -> ModelResult<f64> {
        Ok(self.member_force(index)?.axial)
    }

    /// The full solved displacement vector, node-major
    pub fn displacements(&self) -> ModelResult<DofVector> {
        let mut values = Vec::with_capacity(self.total_dofs());
        for node in &self.nodes {
            let d = node.displacement().ok_or(ModelError::NotSolved)?;
            values.extend_from_slice(d);
        }
        DofVector::from_slice(self.kind, self.n_nodes(), &values)
    }

    /// Equivalent nodal loading from member self-weight
    ///
    /// Tributary rule: each member contributes half its total weight to each
    /// end node. One entry per node, in the units of the section's weight
    /// per length.
    pub fn self_weight_at_nodes(&self) -> Vec<f64> {
        let mut weights = vec![0.0; self.nodes.len()];
        for member in &self.members {
            let g = self.member_geometry(member);
            let half = 0.5 * g.length * member.section.weight;
            weights[member.start] += half;
            weights[member.end] += half;
        }
        weights
    }
}
